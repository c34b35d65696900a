//! Citation rendering from paper metadata.
//!
//! Pure functions: no network access, same input always gives the same string.
//! Missing venue, year or DOI drop out together with their punctuation; a
//! missing title becomes [`NO_TITLE`]; a missing byline drops the author
//! segment.

use std::fmt;
use std::str::FromStr;

use crate::error::ToolError;
use crate::models::Paper;

/// Placeholder for papers without a title.
pub const NO_TITLE: &str = "[No title]";

/// APA lists every author up to this count.
const APA_MAX_LISTED: usize = 7;

/// Authors shown before the ellipsis when APA truncates.
const APA_TRUNCATED_HEAD: usize = 6;

/// Chicago lists every author up to this count.
const CHICAGO_MAX_LISTED: usize = 10;

/// Authors shown before "et al." when Chicago truncates.
const CHICAGO_TRUNCATED_HEAD: usize = 7;

/// Supported citation styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CitationFormat {
    Bibtex,
    Apa,
    Mla,
    Chicago,
}

impl CitationFormat {
    /// Every supported style.
    pub const ALL: [Self; 4] = [Self::Bibtex, Self::Apa, Self::Mla, Self::Chicago];

    /// Lowercase name used in tool arguments.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bibtex => "bibtex",
            Self::Apa => "apa",
            Self::Mla => "mla",
            Self::Chicago => "chicago",
        }
    }
}

impl fmt::Display for CitationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CitationFormat {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                ToolError::invalid_argument(
                    "format",
                    format!("unsupported citation format '{wanted}'; expected bibtex, apa, mla or chicago"),
                )
            })
    }
}

/// Render a citation for `paper` in the given style.
#[must_use]
pub fn format_citation(paper: &Paper, format: CitationFormat) -> String {
    let names: Vec<PersonName<'_>> = paper.author_names().into_iter().map(PersonName::parse).collect();

    match format {
        CitationFormat::Bibtex => bibtex(paper, &names),
        CitationFormat::Apa => apa(paper, &names),
        CitationFormat::Mla => mla(paper, &names),
        CitationFormat::Chicago => chicago(paper, &names),
    }
}

/// A byline name split into family name and given names.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PersonName<'a> {
    full: &'a str,
    family: &'a str,
    given: Vec<&'a str>,
}

impl<'a> PersonName<'a> {
    /// Parse "Given Middle Family" or "Family, Given".
    fn parse(full: &'a str) -> Self {
        let full = full.trim();

        if let Some((family, given)) = full.split_once(',') {
            let family = family.trim();
            if !family.is_empty() {
                let given: Vec<&str> = given.split_whitespace().collect();
                // "Smith," is a bare family name.
                let full = if given.is_empty() { family } else { full };
                return Self { full, family, given };
            }
        }

        let mut tokens: Vec<&str> = full.split_whitespace().collect();
        let family = tokens.pop().unwrap_or(full);
        Self { full, family, given: tokens }
    }

    /// "I. I." from the given names.
    fn initials(&self) -> String {
        self.given.iter().map(|g| initial(g)).filter(|i| !i.is_empty()).collect::<Vec<_>>().join(" ")
    }

    /// "Family, I. I." or the full name when there are no given names.
    fn apa(&self) -> String {
        let initials = self.initials();
        if initials.is_empty() {
            self.full.to_string()
        } else {
            format!("{}, {initials}", self.family)
        }
    }

    /// "Family, Given Middle".
    fn inverted(&self) -> String {
        if self.given.is_empty() {
            self.full.to_string()
        } else {
            format!("{}, {}", self.family, self.given.join(" "))
        }
    }

    /// "Given Middle Family".
    fn natural(&self) -> String {
        if self.given.is_empty() {
            self.full.to_string()
        } else {
            format!("{} {}", self.given.join(" "), self.family)
        }
    }
}

/// "Jean-Paul" -> "J.-P.", "A." -> "A.".
fn initial(given: &str) -> String {
    given
        .split('-')
        .filter_map(|part| part.chars().find(|c| c.is_alphabetic()))
        .map(|c| format!("{}.", c.to_uppercase()))
        .collect::<Vec<_>>()
        .join("-")
}

/// Terminate with a period unless the text already ends a sentence.
fn sentence(text: &str) -> String {
    let text = text.trim();
    if text.ends_with(&['.', '?', '!'][..]) {
        text.to_string()
    } else {
        format!("{text}.")
    }
}

/// `"Title."` with the period inside the quotes.
fn quoted_title(paper: &Paper) -> String {
    format!("\"{}\"", sentence(paper.title().unwrap_or(NO_TITLE)))
}

fn bibtex(paper: &Paper, names: &[PersonName<'_>]) -> String {
    let venue = paper.venue_name();
    let entry_type = if venue.is_some() { "article" } else { "misc" };

    let mut fields = vec![("title", escape_bibtex(paper.title().unwrap_or(NO_TITLE)))];

    if !names.is_empty() {
        let authors = names.iter().map(|n| n.full).collect::<Vec<_>>().join(" and ");
        fields.push(("author", escape_bibtex(&authors)));
    }
    if let Some(year) = paper.year {
        fields.push(("year", year.to_string()));
    }
    if let Some(venue) = venue {
        fields.push(("journal", escape_bibtex(venue)));
    }
    if let Some(doi) = paper.doi() {
        fields.push(("doi", doi.to_string()));
    }
    if let Some(url) = paper.url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
        fields.push(("url", url.to_string()));
    }

    let body = fields
        .iter()
        .map(|(name, value)| format!("  {name} = {{{value}}}"))
        .collect::<Vec<_>>()
        .join(",\n");

    format!("@{entry_type}{{{},\n{body}\n}}", citation_key(paper, names))
}

/// Family name + year, else the paper ID prefix.
fn citation_key(paper: &Paper, names: &[PersonName<'_>]) -> String {
    let family = names
        .first()
        .map(|n| n.family.chars().filter(char::is_ascii_alphanumeric).collect::<String>())
        .filter(|f| !f.is_empty());

    if let (Some(family), Some(year)) = (&family, paper.year) {
        return format!("{family}{year}");
    }

    paper
        .paper_id
        .as_deref()
        .map(|id| id.chars().filter(char::is_ascii_alphanumeric).take(8).collect::<String>())
        .filter(|id| !id.is_empty())
        .or(family)
        .unwrap_or_else(|| "unknown".to_string())
}

fn escape_bibtex(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '{' | '}' | '&' | '%' | '$' | '#' | '_' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

fn apa(paper: &Paper, names: &[PersonName<'_>]) -> String {
    let listed: Vec<String> = names.iter().map(PersonName::apa).collect();
    let byline = match listed.len() {
        0 => None,
        1 => Some(listed[0].clone()),
        n if n <= APA_MAX_LISTED => {
            Some(format!("{}, & {}", listed[..n - 1].join(", "), listed[n - 1]))
        }
        n => Some(format!("{}, ... {}", listed[..APA_TRUNCATED_HEAD].join(", "), listed[n - 1])),
    };

    let with_year = |lead: String| match paper.year {
        Some(year) => format!("{lead} ({year})."),
        None => lead,
    };

    let title = sentence(paper.title().unwrap_or(NO_TITLE));
    let mut parts = match byline {
        Some(byline) => vec![with_year(sentence(&byline)), title],
        // Without authors the title takes the author position.
        None => vec![with_year(title)],
    };

    if let Some(venue) = paper.venue_name() {
        parts.push(sentence(venue));
    }
    if let Some(doi) = paper.doi() {
        parts.push(format!("https://doi.org/{doi}"));
    }

    parts.join(" ")
}

fn mla(paper: &Paper, names: &[PersonName<'_>]) -> String {
    let mut parts = Vec::new();

    if let Some(first) = names.first() {
        let byline = if names.len() > 1 {
            format!("{}, et al.", first.inverted())
        } else {
            first.inverted()
        };
        parts.push(sentence(&byline));
    }

    parts.push(quoted_title(paper));

    match (paper.venue_name(), paper.year) {
        (Some(venue), Some(year)) => parts.push(format!("{}, {year}.", venue.trim_end_matches('.'))),
        (Some(venue), None) => parts.push(sentence(venue)),
        (None, Some(year)) => parts.push(format!("{year}.")),
        (None, None) => {}
    }

    if let Some(doi) = paper.doi() {
        parts.push(format!("doi:{doi}."));
    }

    parts.join(" ")
}

fn chicago(paper: &Paper, names: &[PersonName<'_>]) -> String {
    let mut parts = Vec::new();

    if let Some(byline) = chicago_byline(names) {
        parts.push(sentence(&byline));
    }

    parts.push(quoted_title(paper));

    match (paper.venue_name(), paper.year) {
        (Some(venue), Some(year)) => parts.push(format!("{venue} ({year}).")),
        (Some(venue), None) => parts.push(sentence(venue)),
        (None, Some(year)) => parts.push(format!("{year}.")),
        (None, None) => {}
    }

    if let Some(doi) = paper.doi() {
        parts.push(format!("https://doi.org/{doi}"));
    }

    parts.join(" ")
}

/// First author inverted, the rest in natural order.
fn chicago_byline(names: &[PersonName<'_>]) -> Option<String> {
    let (first, rest) = names.split_first()?;
    let lead = first.inverted();

    if rest.is_empty() {
        return Some(lead);
    }

    if names.len() > CHICAGO_MAX_LISTED {
        let shown: Vec<String> = std::iter::once(lead)
            .chain(rest[..CHICAGO_TRUNCATED_HEAD - 1].iter().map(PersonName::natural))
            .collect();
        return Some(format!("{}, et al.", shown.join(", ")));
    }

    let (last, middle) = rest.split_last()?;
    let mut listed = vec![lead];
    listed.extend(middle.iter().map(PersonName::natural));
    Some(format!("{}, and {}", listed.join(", "), last.natural()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Author, ExternalIds};

    fn paper(title: &str, authors: &[&str]) -> Paper {
        Paper {
            paper_id: Some("649def34f8be52c8b66281af98ae884c09aef38b".to_string()),
            title: Some(title.to_string()),
            authors: Some(authors.iter().map(|a| Author::named(*a)).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_format_names() {
        assert_eq!("bibtex".parse::<CitationFormat>().unwrap(), CitationFormat::Bibtex);
        assert_eq!(" APA ".parse::<CitationFormat>().unwrap(), CitationFormat::Apa);
        assert_eq!("Chicago".parse::<CitationFormat>().unwrap(), CitationFormat::Chicago);
        assert_eq!(CitationFormat::Mla.to_string(), "mla");
    }

    #[test]
    fn test_unknown_format_is_invalid_argument() {
        let err = "harvard".parse::<CitationFormat>().unwrap_err();
        assert!(matches!(err, ToolError::InvalidArgument { .. }));
        assert!(err.to_string().contains("harvard"));
    }

    #[test]
    fn test_person_name_parsing() {
        let name = PersonName::parse("Aidan N. Gomez");
        assert_eq!(name.family, "Gomez");
        assert_eq!(name.given, vec!["Aidan", "N."]);
        assert_eq!(name.apa(), "Gomez, A. N.");

        let name = PersonName::parse("Curie, Marie");
        assert_eq!(name.family, "Curie");
        assert_eq!(name.natural(), "Marie Curie");

        let name = PersonName::parse("Jean-Paul Sartre");
        assert_eq!(name.apa(), "Sartre, J.-P.");
    }

    #[test]
    fn test_single_token_name_degrades_to_full_name() {
        let name = PersonName::parse("Plato");
        assert_eq!(name.apa(), "Plato");
        assert_eq!(name.inverted(), "Plato");
        assert_eq!(name.natural(), "Plato");
    }

    #[test]
    fn test_trailing_comma_name_is_bare_family_name() {
        let name = PersonName::parse("Smith, ");
        assert_eq!(name.full, "Smith");
        assert_eq!(name.family, "Smith");
        assert!(name.given.is_empty());

        let p = Paper { year: Some(2020), ..paper("T", &["Smith,"]) };
        assert_eq!(format_citation(&p, CitationFormat::Apa), "Smith. (2020). T.");
        assert_eq!(format_citation(&p, CitationFormat::Mla), "Smith. \"T.\" 2020.");
        assert_eq!(format_citation(&p, CitationFormat::Chicago), "Smith. \"T.\" 2020.");
    }

    #[test]
    fn test_sentence_does_not_double_punctuation() {
        assert_eq!(sentence("Done"), "Done.");
        assert_eq!(sentence("Done."), "Done.");
        assert_eq!(sentence("Why?"), "Why?");
    }

    #[test]
    fn test_bibtex_key_falls_back_to_paper_id() {
        let p = paper("T", &["Ashish Vaswani"]);
        assert_eq!(citation_key(&p, &[PersonName::parse("Ashish Vaswani")]), "649def34");

        let p = Paper { year: Some(2017), ..paper("T", &["Ashish Vaswani"]) };
        assert_eq!(citation_key(&p, &[PersonName::parse("Ashish Vaswani")]), "Vaswani2017");

        let p = Paper { paper_id: None, ..Paper::default() };
        assert_eq!(citation_key(&p, &[]), "unknown");
    }

    #[test]
    fn test_bibtex_escapes_special_characters() {
        let p = paper("Q&A at 100%", &["Jane Doe"]);
        let out = format_citation(&p, CitationFormat::Bibtex);
        assert!(out.contains("title = {Q\\&A at 100\\%}"));
    }

    #[test]
    fn test_bibtex_article_with_all_fields() {
        let p = Paper {
            year: Some(2017),
            venue: Some("NeurIPS".to_string()),
            external_ids: Some(ExternalIds { doi: Some("10.5555/3295222".to_string()), ..Default::default() }),
            ..paper("Attention Is All You Need", &["Ashish Vaswani", "Noam Shazeer"])
        };

        assert_eq!(
            format_citation(&p, CitationFormat::Bibtex),
            "@article{Vaswani2017,\n  title = {Attention Is All You Need},\n  author = {Ashish Vaswani and Noam Shazeer},\n  year = {2017},\n  journal = {NeurIPS},\n  doi = {10.5555/3295222}\n}"
        );
    }

    #[test]
    fn test_apa_two_authors_uses_ampersand() {
        let p = Paper { year: Some(2020), ..paper("A Title", &["Ada Lovelace", "Charles Babbage"]) };
        assert_eq!(
            format_citation(&p, CitationFormat::Apa),
            "Lovelace, A., & Babbage, C. (2020). A Title."
        );
    }

    #[test]
    fn test_apa_without_authors_leads_with_title() {
        let p = Paper { year: Some(1999), ..paper("Anonymous Work", &[]) };
        assert_eq!(format_citation(&p, CitationFormat::Apa), "Anonymous Work. (1999).");
    }

    #[test]
    fn test_mla_single_author() {
        let p = Paper {
            year: Some(1905),
            venue: Some("Annalen der Physik".to_string()),
            ..paper("On the Electrodynamics of Moving Bodies", &["Albert Einstein"])
        };
        assert_eq!(
            format_citation(&p, CitationFormat::Mla),
            "Einstein, Albert. \"On the Electrodynamics of Moving Bodies.\" Annalen der Physik, 1905."
        );
    }

    #[test]
    fn test_mla_question_title_keeps_its_mark() {
        let p = paper("Can Machines Think?", &["Alan Turing", "Someone Else"]);
        assert_eq!(
            format_citation(&p, CitationFormat::Mla),
            "Turing, Alan, et al. \"Can Machines Think?\""
        );
    }

    #[test]
    fn test_chicago_three_authors() {
        let p = Paper {
            year: Some(2015),
            venue: Some("Nature".to_string()),
            ..paper("Deep Learning", &["Yann LeCun", "Yoshua Bengio", "Geoffrey Hinton"])
        };
        assert_eq!(
            format_citation(&p, CitationFormat::Chicago),
            "LeCun, Yann, Yoshua Bengio, and Geoffrey Hinton. \"Deep Learning.\" Nature (2015)."
        );
    }

    #[test]
    fn test_apa_and_chicago_share_doi_link() {
        let p = Paper {
            external_ids: Some(ExternalIds { doi: Some("10.1038/nature14539".to_string()), ..Default::default() }),
            ..paper("Deep Learning", &["Yann LeCun"])
        };
        for format in [CitationFormat::Apa, CitationFormat::Chicago] {
            assert!(format_citation(&p, format).ends_with(" https://doi.org/10.1038/nature14539"), "{format}");
        }
    }

    #[test]
    fn test_chicago_truncates_after_ten() {
        let authors: Vec<String> = (1..=11).map(|i| format!("Given{i} Family{i}")).collect();
        let refs: Vec<&str> = authors.iter().map(String::as_str).collect();
        let out = format_citation(&paper("Big Team", &refs), CitationFormat::Chicago);

        assert!(out.starts_with("Family1, Given1, Given2 Family2,"));
        assert!(out.contains("Given7 Family7, et al. \"Big Team.\""));
        assert!(!out.contains("Family8"));
    }

    #[test]
    fn test_missing_title_uses_placeholder() {
        let p = Paper { title: None, ..paper("", &["Jane Doe"]) };
        for format in CitationFormat::ALL {
            assert!(format_citation(&p, format).contains(NO_TITLE), "{format}");
        }
    }
}
