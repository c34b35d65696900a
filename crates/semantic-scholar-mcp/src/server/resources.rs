//! Static Markdown references for the `fields` argument.

use serde_json::{Value, json};

/// MIME type of every resource.
pub const MIME_TYPE: &str = "text/markdown";

/// URI of the paper field reference.
pub const PAPER_FIELDS_URI: &str = "semantic-scholar://fields/paper";

/// URI of the author field reference.
pub const AUTHOR_FIELDS_URI: &str = "semantic-scholar://fields/author";

const PAPER_FIELDS: &str = "# Paper Fields

Select fields with a comma-separated list, e.g. `title,year,authors.name`.
Nested fields use a dot; selecting `authors.name` implies `authors`.

## Core
- `paperId` - Semantic Scholar paper ID (always returned)
- `corpusId` - numeric corpus ID
- `title` - paper title
- `abstract` - abstract text, when licensing allows
- `year` - publication year
- `publicationDate` - publication date as `YYYY-MM-DD`
- `url` - Semantic Scholar page

## Authors
- `authors` - author list with `authorId` and `name`
- `authors.name`, `authors.affiliations`, `authors.citationCount`, `authors.hIndex`

## Citation graph
- `citationCount` - number of citing papers
- `influentialCitationCount` - citations judged highly influential
- `referenceCount` - number of references
- `citations`, `references` - linked papers; accept nested fields such as `citations.title`

## Venue
- `venue` - normalized venue name
- `publicationVenue` - venue record
- `journal` - `name`, `volume` and `pages`
- `publicationTypes` - e.g. `JournalArticle`, `Conference`, `Review`
- `fieldsOfStudy`, `s2FieldsOfStudy` - subject classifications

## Identifiers and access
- `externalIds` - `DOI`, `ArXiv`, `PubMed`, `MAG`, `ACL`, `DBLP`, `CorpusId`
- `isOpenAccess` - whether a free copy exists
- `openAccessPdf` - `url` and `status` of the free copy
- `embedding.specter_v2` - SPECTER v2 embedding vector
- `tldr` - machine-generated summary
";

const AUTHOR_FIELDS: &str = "# Author Fields

Select fields with a comma-separated list, e.g. `name,hIndex`.

- `authorId` - Semantic Scholar author ID (always returned)
- `externalIds` - ORCID and DBLP identifiers
- `name` - display name
- `affiliations` - institutional affiliations
- `homepage` - personal homepage
- `url` - Semantic Scholar profile page
- `paperCount` - number of papers
- `citationCount` - total citations
- `hIndex` - h-index
- `papers` - authored papers; accepts nested fields such as `papers.title`
";

/// Descriptors for `resources/list`.
#[must_use]
pub fn list() -> Vec<Value> {
    vec![
        json!({
            "uri": PAPER_FIELDS_URI,
            "name": "Paper Fields Reference",
            "description": "Fields selectable in search_paper and get_paper",
            "mimeType": MIME_TYPE
        }),
        json!({
            "uri": AUTHOR_FIELDS_URI,
            "name": "Author Fields Reference",
            "description": "Fields selectable in get_authors",
            "mimeType": MIME_TYPE
        }),
    ]
}

/// Resource body by URI.
#[must_use]
pub fn read(uri: &str) -> Option<&'static str> {
    match uri {
        PAPER_FIELDS_URI => Some(PAPER_FIELDS),
        AUTHOR_FIELDS_URI => Some(AUTHOR_FIELDS),
        _ => None,
    }
}
