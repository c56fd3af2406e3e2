use std::path::Path;

use anyhow::Result;
use tokio::{
    fs::{create_dir_all, File},
    io::AsyncWriteExt,
};

async fn create_parent_dirs_for(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent).await?;
    }
    Ok(())
}

/// Create or truncate the file, making any missing parent directories.
pub async fn create_file<P>(name: P) -> Result<File>
where
    P: AsRef<Path>,
{
    create_parent_dirs_for(name.as_ref()).await?;
    let file = File::create(name).await?;
    Ok(file)
}

pub async fn save_file<P, B>(name: P, bytes: B) -> Result<()>
where
    P: AsRef<Path>,
    B: AsRef<[u8]>,
{
    let mut file = create_file(name).await?;
    write_to(&mut file, bytes).await
}

pub async fn write_to<B>(file: &mut File, bytes: B) -> Result<()>
where
    B: AsRef<[u8]>,
{
    file.write_all(bytes.as_ref()).await?;
    file.flush().await?;
    Ok(())
}
