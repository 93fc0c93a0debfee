// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Namespace queried when none is given
pub const DEFAULT_NAMESPACE: &str = "default";

/// Output token that selects standard output instead of a file
pub const STDOUT_SINK: &str = "stdout";

/// Location of the kubeconfig relative to the user's home directory
pub mod kubeconfig {
    pub const DIR: &str = ".kube";
    pub const FILE: &str = "config";
}
