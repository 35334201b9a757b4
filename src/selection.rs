use std::collections::HashSet;

/// Positional selection rules applied to the resolved candidate list.
///
/// Positions are 1-based and refer purely to catalog order within one
/// resolution; they are never cached across runs.
#[derive(Debug, Clone, Default)]
pub struct TrackSelection {
    pub limit: Option<usize>,
    pub include: HashSet<usize>,
    pub exclude: HashSet<usize>,
    pub range: Option<(usize, usize)>,
}

impl TrackSelection {
    pub fn new(
        limit: Option<usize>,
        include: Vec<usize>,
        exclude: Vec<usize>,
        range: Option<(usize, usize)>,
    ) -> Self {
        Self {
            limit,
            include: include.into_iter().collect(),
            exclude: exclude.into_iter().collect(),
            range,
        }
    }

    /// Decides whether the track at `position` proceeds to download, given
    /// how many tracks have already been downloaded this run.
    ///
    /// Rule order, first decisive rule wins:
    /// 1. limit cutoff — checked before everything so a limit of N yields
    ///    exactly N downloads regardless of include/exclude noise
    /// 2. include membership accepts (explicit opt-in wins over 3 and 4)
    /// 3. exclude membership rejects
    /// 4. a position outside the range rejects
    pub fn should_download(&self, position: usize, downloaded: usize) -> bool {
        if let Some(limit) = self.limit {
            if downloaded >= limit {
                return false;
            }
        }
        if self.include.contains(&position) {
            return true;
        }
        if self.exclude.contains(&position) {
            return false;
        }
        if let Some((start, end)) = self.range {
            // an inverted range (start > end) admits nothing
            if !(start <= position && position <= end) {
                return false;
            }
        }
        true
    }
}
