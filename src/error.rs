// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KjError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to load kubeconfig: {0}")]
    Kubeconfig(String),

    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("Namespace {0} not found")]
    NamespaceNotFound(String),

    #[error("File {} already exists", .0.display())]
    OutputExists(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write CSV records: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, KjError>;
