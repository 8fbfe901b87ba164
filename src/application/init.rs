//! Init Use Case
//!
//! Scan a directory, then generate context files for what was found.

use std::path::Path;

use tracing::{debug, warn};

use crate::domain::entities::{Detection, DetectionSet};
use crate::domain::ports::{FileSystem, GenerateEventSink, TemplateRenderer, TemplateStore};
use crate::domain::services::TreeScanner;
use crate::domain::value_objects::StackKind;
use crate::error::{AgenticResult, ScanError};

use super::generate::{ContextGenerator, GenerateOptions, GenerateResult};

/// Options for the init flow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitOptions {
    pub generate: GenerateOptions,
    /// Directory names the scanner skips in addition to the built-in list
    pub extra_ignore: Vec<String>,
}

impl InitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_generate(mut self, generate: GenerateOptions) -> Self {
        self.generate = generate;
        self
    }

    pub fn with_extra_ignore(mut self, names: Vec<String>) -> Self {
        self.extra_ignore = names;
        self
    }
}

/// What the scan phase found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub detections: DetectionSet,
    pub is_monorepo: bool,
    /// Nothing was detected and an `unknown` project at the root was assumed
    pub assumed_unknown: bool,
}

/// Init use case - scan then generate
pub struct InitUseCase<'a, FS, TS, TR>
where
    FS: FileSystem + ?Sized,
    TS: TemplateStore,
    TR: TemplateRenderer,
{
    fs: &'a FS,
    generator: ContextGenerator<'a, FS, TS, TR>,
    extra_ignore: Vec<String>,
}

impl<'a, FS, TS, TR> InitUseCase<'a, FS, TS, TR>
where
    FS: FileSystem + ?Sized,
    TS: TemplateStore,
    TR: TemplateRenderer,
{
    pub fn new(fs: &'a FS, templates: TS, renderer: TR, options: InitOptions) -> Self {
        Self {
            fs,
            generator: ContextGenerator::new(fs, templates, renderer, options.generate),
            extra_ignore: options.extra_ignore,
        }
    }

    /// Detect projects under `root`.
    ///
    /// An empty result becomes a single `unknown` detection at the root so
    /// generation always has something to work with.
    pub fn scan(&self, root: &Path) -> Result<ScanOutcome, ScanError> {
        let scanner =
            TreeScanner::new(self.fs).with_extra_ignore(self.extra_ignore.iter().cloned());
        let mut detections = scanner.scan(root)?;

        let assumed_unknown = detections.is_empty();
        if assumed_unknown {
            warn!(root = %root.display(), "no known stack detected, using generic templates");
            detections.push(Detection::new(root, StackKind::Unknown));
        }

        let is_monorepo = detections.is_monorepo();
        debug!(count = detections.len(), is_monorepo, "detection finished");

        Ok(ScanOutcome {
            detections,
            is_monorepo,
            assumed_unknown,
        })
    }

    /// Generate files for a previous [`scan`](Self::scan)
    pub fn generate(
        &self,
        root: &Path,
        scan: &ScanOutcome,
        sink: &dyn GenerateEventSink,
    ) -> AgenticResult<GenerateResult> {
        Ok(self
            .generator
            .generate(root, &scan.detections, scan.is_monorepo, sink)?)
    }

    /// Scan and generate in one step
    pub fn execute(
        &self,
        root: &Path,
        sink: &dyn GenerateEventSink,
    ) -> AgenticResult<(ScanOutcome, GenerateResult)> {
        let scan = self.scan(root)?;
        let result = self.generate(root, &scan, sink)?;
        Ok((scan, result))
    }
}
