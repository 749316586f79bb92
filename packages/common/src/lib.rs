pub mod error;
pub mod result;
pub mod translate;
pub mod url;

pub use error::*;
pub use result::*;
pub use translate::*;
pub use url::*;
