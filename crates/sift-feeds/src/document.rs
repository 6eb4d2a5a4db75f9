//! Feed documents.

use super::*;

use std::str::FromStr;

/// An owned, in-memory feed document.
/// Entries keep their underlying representation, so everything but the
/// entry sequence survives a filter pass unchanged.
#[derive(Clone, Debug)]
pub enum FeedDocument {
    /// An rss `<channel>` document.
    Rss(rss::Channel),
    /// An atom `<feed>` document.
    Atom(atom_syndication::Feed),
}

impl FeedDocument {
    /// Read and parse a feed document from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| {
            FeedError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;
        data.parse()
    }

    /// Get the document title.
    pub fn title(&self) -> &str {
        match self {
            FeedDocument::Rss(channel) => channel.title(),
            FeedDocument::Atom(feed) => feed.title().value.as_str(),
        }
    }

    /// Get the number of entries.
    pub fn entry_count(&self) -> usize {
        match self {
            FeedDocument::Rss(channel) => channel.items().len(),
            FeedDocument::Atom(feed) => feed.entries().len(),
        }
    }

    /// Iterate the entries in document order.
    pub fn entries<'a>(
        &'a self,
    ) -> Box<dyn Iterator<Item = EntryRef<'a>> + 'a> {
        match self {
            FeedDocument::Rss(channel) => {
                Box::new(channel.items().iter().map(EntryRef::Rss))
            }
            FeedDocument::Atom(feed) => {
                Box::new(feed.entries().iter().map(EntryRef::Atom))
            }
        }
    }

    /// Replace the entry sequence with the entries that pass every
    /// filter, preserving relative order and entry content.
    pub fn retain_entries(&mut self, filters: &[Filter]) {
        match self {
            FeedDocument::Rss(channel) => {
                let kept: Vec<rss::Item> = channel
                    .items()
                    .iter()
                    .filter(|item| {
                        passes_filters(filters, &EntryRef::Rss(item))
                    })
                    .cloned()
                    .collect();
                tracing::debug!(
                    "Kept {} of {} rss items.",
                    kept.len(),
                    channel.items().len()
                );
                channel.set_items(kept);
            }
            FeedDocument::Atom(feed) => {
                let kept: Vec<atom_syndication::Entry> = feed
                    .entries()
                    .iter()
                    .filter(|entry| {
                        passes_filters(filters, &EntryRef::Atom(entry))
                    })
                    .cloned()
                    .collect();
                tracing::debug!(
                    "Kept {} of {} atom entries.",
                    kept.len(),
                    feed.entries().len()
                );
                feed.set_entries(kept);
            }
        }
    }

    /// Serialize the document back to markup.
    pub fn to_xml(&self) -> Result<String, FeedError> {
        let buf = match self {
            FeedDocument::Rss(channel) => {
                channel.write_to(Vec::new()).map_err(|e| {
                    FeedError::Serialize {
                        reason: e.to_string(),
                    }
                })?
            }
            FeedDocument::Atom(feed) => {
                feed.write_to(Vec::new()).map_err(|e| {
                    FeedError::Serialize {
                        reason: e.to_string(),
                    }
                })?
            }
        };
        String::from_utf8(buf).map_err(|e| FeedError::Serialize {
            reason: e.to_string(),
        })
    }

    /// Serialize and write the document to a file.
    /// The markup lands in a temporary sibling first and is renamed into
    /// place, so a failed run leaves no partial output behind.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), FeedError> {
        let path = path.as_ref();
        let xml = self.to_xml()?;
        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        if let Err(source) = std::fs::write(&tmp, &xml) {
            std::fs::remove_file(&tmp).ok();
            return Err(FeedError::Write {
                path: path.to_path_buf(),
                source,
            });
        }
        if let Err(source) = std::fs::rename(&tmp, path) {
            std::fs::remove_file(&tmp).ok();
            return Err(FeedError::Write {
                path: path.to_path_buf(),
                source,
            });
        }
        Ok(())
    }
}

impl FromStr for FeedDocument {
    type Err = FeedError;

    /// Parse a feed document, trying atom then rss.
    fn from_str(body: &str) -> Result<Self, Self::Err> {
        let mut parse_error = String::new();

        match body.parse::<atom_syndication::Feed>() {
            Ok(atom_feed) => {
                tracing::trace!("Parsed document as atom.");
                return Ok(FeedDocument::Atom(atom_feed));
            }
            Err(e) => {
                parse_error.push_str(&format!("\n{}", e));
            }
        }

        match body.parse::<rss::Channel>() {
            Ok(rss_channel) => {
                tracing::trace!("Parsed document as rss.");
                return Ok(FeedDocument::Rss(rss_channel));
            }
            Err(e) => {
                parse_error.push_str(&format!("\n{}", e));
            }
        }

        Err(FeedError::Parse {
            reasons: parse_error,
        })
    }
}
