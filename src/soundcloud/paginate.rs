use serde::de::DeserializeOwned;

use crate::soundcloud::client::ApiClient;
use crate::types::PagedResponse;

/// Walks a cursor-paginated collection endpoint until enough qualifying
/// items are collected or the cursor is exhausted.
///
/// Each page is fetched, its items filtered through `predicate` in arrival
/// order, and the survivors appended to the accumulator. The page's
/// `next_href` replaces the current URL; an absent cursor is the sole
/// termination signal besides reaching `target_count`.
///
/// The caller's `params` apply to the first request only - a continuation
/// cursor is a complete URL that already carries its own query string.
///
/// Returns at least `target_count` qualifying items when the collection has
/// that many, possibly a few more since filtering happens after a full page
/// is appended. Callers that need an exact count truncate downstream.
///
/// A page that lacks the expected collection structure fails
/// deserialization and is a hard fault for this call; already-accumulated
/// items are discarded with it. Transport retries live in the client, not
/// here.
pub async fn collect_paginated<T, F>(
    client: &ApiClient,
    url: &str,
    params: &[(&str, String)],
    target_count: usize,
    predicate: F,
) -> Result<Vec<T>, reqwest::Error>
where
    T: DeserializeOwned,
    F: Fn(&T) -> bool,
{
    let mut collected: Vec<T> = Vec::new();
    let mut next_url = Some(url.to_string());
    let mut first_page = true;

    while collected.len() < target_count {
        let current = match next_url.take() {
            Some(current) => current,
            None => break, // cursor exhausted
        };

        let page: PagedResponse<T> = if first_page {
            client.get_json(&current, params).await?
        } else {
            client.get_json(&current, &[]).await?
        };
        first_page = false;

        collected.extend(page.collection.into_iter().filter(|item| predicate(item)));
        next_url = page.next_href;
    }

    Ok(collected)
}
