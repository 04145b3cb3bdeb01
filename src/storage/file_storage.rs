use crate::{
    domain::board::Board,
    error::Result,
    storage::{Snapshot, Storage},
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based storage implementation.
///
/// The whole board lives in one JSON blob, mirroring the key-value store the
/// presentation layer would otherwise use.
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const FLOWBOARD_DIR: &'static str = ".flowboard";
    const BOARD_FILE: &'static str = "board.json";

    /// Creates a new FileStorage instance for the given project root
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: project_root.as_ref().join(Self::FLOWBOARD_DIR),
        }
    }

    fn board_file(&self) -> PathBuf {
        self.root_path.join(Self::BOARD_FILE)
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn load_board(&self) -> Result<Option<Board>> {
        let board_file = self.board_file();

        if !board_file.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&board_file).await?;
        Ok(Snapshot::decode(&contents))
    }

    async fn save_board(&self, board: &Board) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        let blob = Snapshot::encode(board)?;
        fs::write(self.board_file(), blob).await?;

        Ok(())
    }
}
