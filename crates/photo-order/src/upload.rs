//! Upload batch validation.
//!
//! Each batch replaces the previous one. Files are checked one by one; rejections do not
//! stop the rest of the batch.

use crate::model::FileDescriptor;
use serde::Serialize;
use thiserror::Error;

pub const BATCH_WARNING: &str = "Certains fichiers n'ont pas pu être ajoutés.";

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Why a single file was refused. `Display` is the inline marker shown next to it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum FileRejection {
    #[error("❌ Format non supporté")]
    UnsupportedType { mime_type: String },

    #[error("❌ Fichier trop volumineux (max {})", format_limit(.max))]
    TooLarge { size: u64, max: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum UploadStatus {
    Accepted { size_label: String },
    Rejected(FileRejection),
}

/// One line of the upload list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadRow {
    pub name: String,
    pub status: UploadStatus,
}

impl UploadRow {
    pub fn is_accepted(&self) -> bool {
        matches!(self.status, UploadStatus::Accepted { .. })
    }

    /// Label as listed on the page; accepted files get the photo marker.
    pub fn label(&self) -> String {
        match &self.status {
            UploadStatus::Accepted { size_label } => format!("📷 {} ({size_label})", self.name),
            UploadStatus::Rejected(reason) => format!("{} {reason}", self.name),
        }
    }
}

/// Rendered result of one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadReport {
    pub rows: Vec<UploadRow>,
    /// Set once if any file of the batch was refused.
    pub warning: Option<String>,
}

impl UploadReport {
    pub fn accepted_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_accepted()).count()
    }

    pub fn rejected_count(&self) -> usize {
        self.rows.len() - self.accepted_count()
    }
}

/// Checks one file against the media-type and size rules. The size bound is inclusive.
pub fn check_file(file: &FileDescriptor, max_size: u64) -> Result<(), FileRejection> {
    if !file.mime_type.starts_with("image/") {
        return Err(FileRejection::UnsupportedType {
            mime_type: file.mime_type.clone(),
        });
    }
    if file.byte_size > max_size {
        return Err(FileRejection::TooLarge {
            size: file.byte_size,
            max: max_size,
        });
    }
    Ok(())
}

/// Validates a batch, returning the accepted files and the report to render.
pub fn process_batch(
    files: Vec<FileDescriptor>,
    max_size: u64,
) -> (Vec<FileDescriptor>, UploadReport) {
    let mut accepted = Vec::with_capacity(files.len());
    let mut rows = Vec::with_capacity(files.len());

    for file in files {
        match check_file(&file, max_size) {
            Ok(()) => {
                rows.push(UploadRow {
                    name: file.name.clone(),
                    status: UploadStatus::Accepted {
                        size_label: format_file_size(file.byte_size),
                    },
                });
                accepted.push(file);
            }
            Err(reason) => rows.push(UploadRow {
                name: file.name,
                status: UploadStatus::Rejected(reason),
            }),
        }
    }

    let warning = rows
        .iter()
        .any(|r| !r.is_accepted())
        .then(|| BATCH_WARNING.to_string());
    (accepted, UploadReport { rows, warning })
}

/// `512 o`, `1.5 Ko`, `2.00 Mo`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{bytes} o")
    } else if bytes < MIB {
        format!("{:.1} Ko", bytes as f64 / KIB as f64)
    } else {
        format!("{:.2} Mo", bytes as f64 / MIB as f64)
    }
}

fn format_limit(max: &u64) -> String {
    let max = *max;
    if max % MIB == 0 {
        format!("{} Mo", max / MIB)
    } else {
        format_file_size(max)
    }
}
