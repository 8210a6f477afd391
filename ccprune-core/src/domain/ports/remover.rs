use std::io;
use std::path::Path;

pub trait FileRemover {
    fn remove(&self, path: &Path) -> io::Result<()>;
}
