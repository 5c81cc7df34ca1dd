use thiserror::Error;

pub type Result<T> = std::result::Result<T, AuraError>;

#[derive(Error, Debug)]
pub enum AuraError {
    #[error("Git repository error: {0}")]
    GitRepo(String),
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("Cache error: {0}")]
    Cache(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("GitHub error: {0}")]
    GitHub(String),
    #[error("Invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),
    #[error("Palette must have exactly {expected} colors, got {found}")]
    PaletteLength { expected: usize, found: usize },
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
    #[error("Git discover error: {0}")]
    GitDiscover(#[from] Box<gix::discover::Error>),
}

// gix errors are large; keep them boxed inside the enum.
impl From<gix::object::commit::Error> for AuraError {
    fn from(err: gix::object::commit::Error) -> Self {
        AuraError::Commit(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for AuraError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        AuraError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for AuraError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        AuraError::HeadPeel(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for AuraError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        AuraError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for AuraError {
    fn from(err: gix::objs::decode::Error) -> Self {
        AuraError::ObjectDecode(Box::new(err))
    }
}

impl From<gix::discover::Error> for AuraError {
    fn from(err: gix::discover::Error) -> Self {
        AuraError::GitDiscover(Box::new(err))
    }
}
