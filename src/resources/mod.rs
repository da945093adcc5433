//! Resource primitives (check + apply pattern).
pub mod symlink;

/// State of a resource's target path.
///
/// # Examples
///
/// ```
/// use dotgo::resources::ResourceState;
///
/// assert_ne!(ResourceState::Missing, ResourceState::Occupied);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceState {
    /// Nothing exists at the target.
    Missing,
    /// Something (file, directory, or symlink, possibly dangling) is already there.
    Occupied,
}

/// Result of applying a resource.
///
/// # Examples
///
/// ```
/// use dotgo::resources::ResourceChange;
///
/// let applied = ResourceChange::Applied;
/// assert_ne!(applied, ResourceChange::AlreadyExists);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceChange {
    /// Resource was created.
    Applied,
    /// Target was occupied; nothing was changed.
    AlreadyExists,
}
