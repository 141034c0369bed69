//! Frontier and visited-set management
//!
//! The frontier is a plain FIFO queue, so pages closer to the seed are fetched
//! first. URLs are marked visited when dequeued, not when enqueued: the queue may
//! hold the same URL several times, and every copy after the first is skipped.

use crate::crawler::parser::extract_hrefs;
use crate::url::{normalize_url, resolve_url, CanonicalUrl, UrlFilter};
use crate::UrlResult;
use scraper::Html;
use std::collections::{HashSet, VecDeque};
use url::Url;

/// BFS queue plus the set of URLs already taken off it
#[derive(Debug)]
pub struct Frontier {
    queue: VecDeque<CanonicalUrl>,
    visited: HashSet<CanonicalUrl>,
    filter: UrlFilter,
}

impl Frontier {
    /// Creates an empty frontier that admits links passing `filter`
    pub fn new(filter: UrlFilter) -> Self {
        Self {
            queue: VecDeque::new(),
            visited: HashSet::new(),
            filter,
        }
    }

    /// The URL filter this frontier discovers links with
    pub fn filter(&self) -> &UrlFilter {
        &self.filter
    }

    /// Canonicalizes the seed URL and queues it
    ///
    /// The seed is queued even if an exclusion pattern would reject it.
    pub fn enqueue_seed(&mut self, seed: &str) -> UrlResult<CanonicalUrl> {
        let canonical = normalize_url(seed)?;
        tracing::debug!("Seeding frontier with {}", canonical);
        self.queue.push_back(canonical.clone());
        Ok(canonical)
    }

    /// Appends every URL not yet visited to the tail of the queue
    ///
    /// Returns how many URLs were queued.
    pub fn enqueue_all<I>(&mut self, urls: I) -> usize
    where
        I: IntoIterator<Item = CanonicalUrl>,
    {
        let before = self.queue.len();
        for url in urls {
            if !self.visited.contains(&url) {
                self.queue.push_back(url);
            }
        }
        self.queue.len() - before
    }

    /// Pops the oldest queued URL
    ///
    /// The caller marks it visited before processing; see [`Frontier::mark_visited`].
    pub fn dequeue(&mut self) -> Option<CanonicalUrl> {
        self.queue.pop_front()
    }

    /// Records a URL as visited
    ///
    /// Returns false if it was already visited, in which case the caller must
    /// not fetch it again.
    pub fn mark_visited(&mut self, url: &CanonicalUrl) -> bool {
        self.visited.insert(url.clone())
    }

    /// Collects the crawlable, not-yet-visited links of a document
    ///
    /// Every `<a href>` is resolved against `current_url`, canonicalized and
    /// passed through the URL filter. Document order is preserved and repeats
    /// within the page are kept; they are dropped at dequeue time.
    ///
    /// # Example
    ///
    /// ```
    /// use faq_harvest::crawler::Frontier;
    /// use faq_harvest::url::UrlFilter;
    /// use scraper::Html;
    /// use url::Url;
    ///
    /// let seed = Url::parse("https://example.com/").unwrap();
    /// let frontier = Frontier::new(UrlFilter::with_default_patterns(&seed).unwrap());
    ///
    /// let html = Html::parse_document(
    ///     r#"<a href="/faq/">FAQ</a><a href="https://other.com/">Other</a><a href="/guide.pdf">PDF</a>"#,
    /// );
    /// let links = frontier.discover_links(&html, &seed);
    /// assert_eq!(links.len(), 1);
    /// assert_eq!(links[0].as_str(), "https://example.com/faq");
    /// ```
    pub fn discover_links(&self, document: &Html, current_url: &Url) -> Vec<CanonicalUrl> {
        extract_hrefs(document)
            .iter()
            .filter_map(|href| match resolve_url(href, current_url) {
                Ok(url) => Some(url),
                Err(e) => {
                    tracing::trace!("Skipping link {}: {}", href, e);
                    None
                }
            })
            .filter(|url| self.filter.is_valid(url.as_str()))
            .filter(|url| !self.visited.contains(url))
            .collect()
    }

    /// Number of entries waiting in the queue, duplicates included
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns true if some queued entry has not been visited yet
    pub fn has_pending(&self) -> bool {
        self.queue.iter().any(|url| !self.visited.contains(url))
    }

    /// Number of distinct URLs visited so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
