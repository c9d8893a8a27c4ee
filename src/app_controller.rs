use anyhow::Result;
use log::{debug, error, info, warn};
use std::path::PathBuf;

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::transcript::Transcript;

// @module: Application controller for transcript conversion

/// Main application controller driving raw transcript to WebVTT
/// conversion: read, parse, re-segment long cues, write.
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Convert a single raw transcript file to WebVTT next to the input.
    pub fn run(&self, input_file: PathBuf, force_overwrite: bool) -> Result<()> {
        if !input_file.exists() {
            return Err(anyhow::anyhow!("Input file does not exist: {:?}", input_file));
        }

        let output_path =
            FileManager::generate_output_path(&input_file, &self.config.output_extension);
        if output_path.exists() && !force_overwrite {
            warn!(
                "Skipping file, output already exists (use -f to force overwrite): {:?}",
                output_path
            );
            return Ok(());
        }

        info!("Converting transcript: {:?}", input_file);

        let transcript = Transcript::from_raw_file(&input_file)?;
        debug!("Parsed {} cue(s)", transcript.cues.len());
        if transcript.cues.is_empty() {
            warn!("No cues found in {:?}, output will be header-only", input_file);
        }

        let fixed = transcript.split_long_cues(self.config.max_cue_chars);
        fixed.write_to_vtt(&output_path, self.config.max_line_width)?;

        info!("Success: {:?}", output_path);
        Ok(())
    }

    /// Convert every `.txt` transcript found under a directory.
    pub fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        info!("Converting transcripts in directory: {:?}", input_dir);

        let files = FileManager::find_files(&input_dir, "txt")?;
        if files.is_empty() {
            warn!("No transcript files found in {:?}", input_dir);
            return Ok(());
        }

        let mut processed_count = 0;
        for file in files {
            if let Err(e) = self.run(file.clone(), force_overwrite) {
                error!("Error processing {:?}: {}", file, e);
            } else {
                processed_count += 1;
            }
        }

        info!("Finished processing {} file(s)", processed_count);
        Ok(())
    }
}
