//! In-page anchor navigation.

/// Vertical alignment of the scroll target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBlock {
    /// Align the target with the top of the viewport.
    Start,
}

/// Smooth-scroll instruction for an in-page link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollCommand {
    pub target_id: String,
    pub smooth: bool,
    pub block: ScrollBlock,
}

/// Resolve an `href` such as `#contact` against the ids present on the page.
///
/// Returns `None` for non-fragment links, bare `#`, and fragments that match
/// no element.
///
/// # Examples
/// ```
/// use contact_backend::client::{ScrollBlock, resolve_anchor};
///
/// let command = resolve_anchor("#contact", ["hero", "contact"]).expect("target exists");
/// assert_eq!(command.target_id, "contact");
/// assert_eq!(command.block, ScrollBlock::Start);
/// assert!(resolve_anchor("#missing", ["hero"]).is_none());
/// ```
pub fn resolve_anchor<'a, I>(href: &str, page_ids: I) -> Option<ScrollCommand>
where
    I: IntoIterator<Item = &'a str>,
{
    let target = href.strip_prefix('#').filter(|id| !id.is_empty())?;
    page_ids
        .into_iter()
        .any(|id| id == target)
        .then(|| ScrollCommand {
            target_id: target.to_owned(),
            smooth: true,
            block: ScrollBlock::Start,
        })
}
