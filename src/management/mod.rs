mod download;
mod tag;

pub use download::DownloadManager;
pub use tag::tag_file;
