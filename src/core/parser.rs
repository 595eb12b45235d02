//! Listing API response parsing.
//!
//! Turns one `ListBucketResult` document into a [`Page`]. Objects become
//! file entries, `CommonPrefixes` become directory entries.

use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Deserialize;

use crate::core::error::ListingError;
use crate::models::{Entry, Page};
use crate::utils::encode_component;

const LISTING_ROOT: &str = "ListBucketResult";
const ERROR_ROOT: &str = "Error";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ListBucketResult {
    #[serde(default)]
    prefix: String,
    #[serde(default)]
    is_truncated: bool,
    #[serde(default)]
    next_marker: Option<String>,
    #[serde(default)]
    contents: Vec<ObjectNode>,
    #[serde(default)]
    common_prefixes: Vec<CommonPrefixNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ObjectNode {
    key: String,
    #[serde(default)]
    last_modified: String,
    #[serde(default)]
    size: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CommonPrefixNode {
    prefix: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct StoreErrorDocument {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// Parse one listing API response.
///
/// The returned marker is percent-encoded and ready to be used as a query
/// value. `<Error>` documents are reported as [`ListingError::Store`].
pub fn parse_page(xml: &str) -> Result<Page, ListingError> {
    match root_element(xml)?.as_str() {
        LISTING_ROOT => {}
        ERROR_ROOT => {
            let doc: StoreErrorDocument = quick_xml::de::from_str(xml)
                .map_err(|e| ListingError::Parse(e.to_string()))?;
            return Err(ListingError::Store {
                code: doc.code,
                message: doc.message,
            });
        }
        other => {
            return Err(ListingError::Parse(format!(
                "unexpected root element <{other}>"
            )));
        }
    }

    let result: ListBucketResult =
        quick_xml::de::from_str(xml).map_err(|e| ListingError::Parse(e.to_string()))?;

    let files: Vec<Entry> = result
        .contents
        .into_iter()
        .map(|node| Entry::file(node.key, node.last_modified, node.size))
        .collect();
    let directories: Vec<Entry> = result
        .common_prefixes
        .into_iter()
        .map(|node| Entry::directory(node.prefix))
        .collect();

    let next_marker = if result.is_truncated {
        let marker = result
            .next_marker
            .filter(|m| !m.is_empty())
            .or_else(|| last_key(&files, &directories))
            .ok_or(ListingError::MissingMarker)?;
        Some(encode_component(&marker))
    } else {
        None
    };

    Ok(Page {
        files,
        directories,
        next_marker,
        prefix: result.prefix,
    })
}

/// Name of the document element, skipping the declaration and comments.
fn root_element(xml: &str) -> Result<String, ListingError> {
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => return Err(ListingError::Parse("empty document".to_string())),
            Err(e) => return Err(ListingError::Parse(e.to_string())),
            Ok(_) => {}
        }
    }
}

/// Version 1 listings may omit `NextMarker`; the last key listed continues
/// the listing then.
fn last_key(files: &[Entry], directories: &[Entry]) -> Option<String> {
    let last_file = files.last().map(|e| e.key.as_str());
    let last_dir = directories.last().map(|e| e.key.as_str());
    last_file.max(last_dir).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryKind;

    const SINGLE_PAGE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Name>example-bucket</Name>
  <Prefix>photos/</Prefix>
  <Marker></Marker>
  <MaxKeys>1000</MaxKeys>
  <Delimiter>/</Delimiter>
  <IsTruncated>false</IsTruncated>
  <Contents>
    <Key>photos/cat.jpg</Key>
    <LastModified>2024-03-01T10:00:00.000Z</LastModified>
    <ETag>&quot;d41d8cd98f00b204e9800998ecf8427e&quot;</ETag>
    <Size>2048</Size>
    <StorageClass>STANDARD</StorageClass>
  </Contents>
  <Contents>
    <Key>photos/dog.jpg</Key>
    <LastModified>2024-02-01T10:00:00.000Z</LastModified>
    <Size>4096</Size>
  </Contents>
  <CommonPrefixes>
    <Prefix>photos/2023/</Prefix>
  </CommonPrefixes>
  <CommonPrefixes>
    <Prefix>photos/2024/</Prefix>
  </CommonPrefixes>
</ListBucketResult>"#;

    #[test]
    fn test_parse_single_page() {
        let page = parse_page(SINGLE_PAGE).unwrap();

        assert_eq!(page.prefix, "photos/");
        assert_eq!(page.next_marker, None);

        assert_eq!(
            page.files,
            vec![
                Entry::file("photos/cat.jpg", "2024-03-01T10:00:00.000Z", 2048),
                Entry::file("photos/dog.jpg", "2024-02-01T10:00:00.000Z", 4096),
            ]
        );
        assert_eq!(
            page.directories,
            vec![
                Entry::directory("photos/2023/"),
                Entry::directory("photos/2024/"),
            ]
        );
        assert!(page.directories.iter().all(|d| d.kind == EntryKind::Directory));
    }

    #[test]
    fn test_truncated_marker_is_encoded() {
        let xml = r#"<ListBucketResult>
  <Prefix></Prefix>
  <IsTruncated>true</IsTruncated>
  <NextMarker>docs/a report &amp; notes.txt</NextMarker>
  <Contents><Key>docs/a report &amp; notes.txt</Key><LastModified>2024-01-01T00:00:00.000Z</LastModified><Size>1</Size></Contents>
</ListBucketResult>"#;
        let page = parse_page(xml).unwrap();

        assert_eq!(
            page.next_marker.as_deref(),
            Some("docs%2Fa%20report%20%26%20notes.txt")
        );
        assert_eq!(page.prefix, "");
        assert_eq!(page.files[0].key, "docs/a report & notes.txt");
    }

    #[test]
    fn test_missing_next_marker_uses_last_key() {
        let xml = r#"<ListBucketResult>
  <IsTruncated>true</IsTruncated>
  <Contents><Key>a.txt</Key><Size>1</Size></Contents>
  <Contents><Key>b.txt</Key><Size>1</Size></Contents>
  <CommonPrefixes><Prefix>c/</Prefix></CommonPrefixes>
</ListBucketResult>"#;
        let page = parse_page(xml).unwrap();
        assert_eq!(page.next_marker.as_deref(), Some("c%2F"));
    }

    #[test]
    fn test_truncated_without_any_key() {
        let xml = "<ListBucketResult><IsTruncated>true</IsTruncated></ListBucketResult>";
        assert_eq!(parse_page(xml), Err(ListingError::MissingMarker));
    }

    #[test]
    fn test_empty_listing() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListBucketResult><Name>b</Name><Prefix>empty/</Prefix><IsTruncated>false</IsTruncated></ListBucketResult>"#;
        let page = parse_page(xml).unwrap();
        assert!(page.files.is_empty());
        assert!(page.directories.is_empty());
        assert_eq!(page.prefix, "empty/");
    }

    #[test]
    fn test_store_error_document() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<Error><Code>AccessDenied</Code><Message>Access Denied</Message><RequestId>X</RequestId></Error>"#;
        assert_eq!(
            parse_page(xml),
            Err(ListingError::Store {
                code: "AccessDenied".to_string(),
                message: "Access Denied".to_string(),
            })
        );
    }

    #[test]
    fn test_rejects_other_documents() {
        assert!(matches!(
            parse_page("<html><body>Not Found</body></html>"),
            Err(ListingError::Parse(_))
        ));
        assert!(matches!(parse_page(""), Err(ListingError::Parse(_))));
        assert!(matches!(
            parse_page("<ListBucketResult><IsTruncated>maybe</IsTruncated></ListBucketResult>"),
            Err(ListingError::Parse(_))
        ));
        assert!(matches!(
            parse_page("<ListBucketResult><Contents><Size>12</Size></Contents></ListBucketResult>"),
            Err(ListingError::Parse(_))
        ));
    }
}
