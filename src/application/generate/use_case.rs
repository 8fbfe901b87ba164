//! Generate Use Case
//!
//! Renders the planned files for a detection set and writes them.

use std::path::Path;

use tracing::debug;

use crate::domain::entities::{DetectionSet, MonorepoData, ProjectData, TemplateData};
use crate::domain::ports::{
    FileSystem, FsError, GenerateEvent, GenerateEventSink, TemplateError, TemplateRenderer,
    TemplateStore,
};
use crate::domain::services::{
    generic_template_name, is_generated_context, plan_files, DataSource, PlanKind,
    LEGACY_CONTEXT_FILE, PRIMARY_CONTEXT_FILE,
};
use crate::domain::value_objects::StackKind;
use crate::error::GenerateError;

use super::options::GenerateOptions;
use super::result::GenerateResult;

/// Context generator - writes agent context files for detected projects
pub struct ContextGenerator<'a, FS, TS, TR>
where
    FS: FileSystem + ?Sized,
    TS: TemplateStore,
    TR: TemplateRenderer,
{
    fs: &'a FS,
    templates: TS,
    renderer: TR,
    options: GenerateOptions,
}

impl<'a, FS, TS, TR> ContextGenerator<'a, FS, TS, TR>
where
    FS: FileSystem + ?Sized,
    TS: TemplateStore,
    TR: TemplateRenderer,
{
    pub fn new(fs: &'a FS, templates: TS, renderer: TR, options: GenerateOptions) -> Self {
        Self {
            fs,
            templates,
            renderer,
            options,
        }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Generate files under `root` for `detections`.
    ///
    /// In single-project mode only the first detection is used (`unknown`
    /// when empty). In monorepo mode the root gets the monorepo plan and
    /// every non-root detection gets the subproject plan in its directory.
    /// The first failure aborts the run; files already written stay.
    pub fn generate(
        &self,
        root: &Path,
        detections: &DetectionSet,
        is_monorepo: bool,
        sink: &dyn GenerateEventSink,
    ) -> Result<GenerateResult, GenerateError> {
        let mut result = GenerateResult::new();

        if !is_monorepo {
            let stack = detections
                .first()
                .map(|d| d.stack())
                .unwrap_or(StackKind::Unknown);
            let has_legacy = self.migrate_legacy(root, sink, &mut result)?;
            let data = TemplateData::from(ProjectData::single(stack, has_legacy));
            self.write_plan(root, PlanKind::Single(stack), &data, sink, &mut result)?;
            return Ok(result);
        }

        let has_legacy = self.migrate_legacy(root, sink, &mut result)?;
        let data = TemplateData::from(MonorepoData::new(root, detections, has_legacy));
        self.write_plan(root, PlanKind::MonorepoRoot, &data, sink, &mut result)?;

        for detection in detections.iter().filter(|d| d.path() != root) {
            let dir = detection.path();
            let has_legacy = self.migrate_legacy(dir, sink, &mut result)?;
            let data = TemplateData::from(ProjectData::subproject(
                detection.stack(),
                detection.relative_to(root),
                has_legacy,
            ));
            self.write_plan(
                dir,
                PlanKind::Subproject(detection.stack()),
                &data,
                sink,
                &mut result,
            )?;
        }

        Ok(result)
    }

    /// Move a hand-written `dir/AGENTS.md` to `dir/.agent/AGENTS_LEGACY.md`.
    ///
    /// Content is moved byte for byte. A primary file written by an earlier
    /// run stays where it is. Returns whether a legacy file exists (or
    /// would, under dry run) afterwards. An existing legacy file is never
    /// overwritten.
    pub fn migrate_legacy(
        &self,
        dir: &Path,
        sink: &dyn GenerateEventSink,
        result: &mut GenerateResult,
    ) -> Result<bool, GenerateError> {
        let primary = dir.join(PRIMARY_CONTEXT_FILE);
        let legacy = dir.join(LEGACY_CONTEXT_FILE);

        if !self.fs.exists(&primary) {
            return Ok(false);
        }

        if self.fs.exists(&legacy) {
            debug!(path = %legacy.display(), "legacy context file already present");
            self.emit(sink, GenerateEvent::LegacyPresent { path: legacy });
            return Ok(true);
        }

        let content = self
            .fs
            .read_bytes(&primary)
            .map_err(migrate_error(&primary))?;
        if is_generated_context(&content) {
            debug!(path = %primary.display(), "primary context file was generated, not migrating");
            return Ok(false);
        }

        if self.options.dry_run {
            result.add_would_migrate(primary.clone());
            sink.on_event(GenerateEvent::WouldMigrate {
                from: primary,
                to: legacy,
            });
            return Ok(true);
        }

        if let Some(parent) = legacy.parent() {
            self.fs
                .create_dir_all(parent)
                .map_err(migrate_error(parent))?;
        }
        self.fs
            .write_bytes(&legacy, &content)
            .map_err(migrate_error(&legacy))?;
        self.fs.remove(&primary).map_err(migrate_error(&primary))?;

        debug!(from = %primary.display(), to = %legacy.display(), "migrated context file");
        result.add_migrated(primary.clone());
        sink.on_event(GenerateEvent::Migrated {
            from: primary,
            to: legacy,
        });
        Ok(true)
    }

    fn write_plan(
        &self,
        dir: &Path,
        kind: PlanKind,
        data: &TemplateData,
        sink: &dyn GenerateEventSink,
        result: &mut GenerateResult,
    ) -> Result<(), GenerateError> {
        let unknown_data = TemplateData::from(ProjectData::single(StackKind::Unknown, false));

        for file in plan_files(kind) {
            let file_data = match file.data {
                DataSource::Context => data,
                DataSource::UnknownStack => &unknown_data,
            };
            self.write_file(&dir.join(file.output), &file.template, file_data, sink, result)?;
        }
        Ok(())
    }

    fn write_file(
        &self,
        path: &Path,
        template: &str,
        data: &TemplateData,
        sink: &dyn GenerateEventSink,
        result: &mut GenerateResult,
    ) -> Result<(), GenerateError> {
        if !self.options.force && self.fs.exists(path) {
            debug!(path = %path.display(), "skipping existing file");
            result.add_skipped(path.to_path_buf());
            self.emit(
                sink,
                GenerateEvent::Skipped {
                    path: path.to_path_buf(),
                },
            );
            return Ok(());
        }

        let template_err = |source| GenerateError::Template {
            path: path.to_path_buf(),
            source,
        };
        let source = self.lookup(template).map_err(template_err)?;
        let content = self
            .renderer
            .render(template, &source, data)
            .map_err(template_err)?;

        if self.options.dry_run {
            result.add_would_create(path.to_path_buf());
            sink.on_event(GenerateEvent::WouldCreate {
                path: path.to_path_buf(),
            });
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            self.fs
                .create_dir_all(parent)
                .map_err(|source| GenerateError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
        self.fs
            .write(path, &content)
            .map_err(|source| GenerateError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(path = %path.display(), template, "created file");
        result.add_created(path.to_path_buf());
        sink.on_event(GenerateEvent::Created {
            path: path.to_path_buf(),
        });
        Ok(())
    }

    /// Forward `event`, dropping detail events unless verbose
    fn emit(&self, sink: &dyn GenerateEventSink, event: GenerateEvent) {
        if event.is_detail() && !self.options.verbose {
            return;
        }
        sink.on_event(event);
    }

    /// Stack-qualified lookup, then the generic base name
    fn lookup(&self, name: &str) -> Result<String, TemplateError> {
        match self.templates.lookup(name) {
            Err(err) if err.is_not_found() => match generic_template_name(name) {
                Some(generic) => self
                    .templates
                    .lookup(generic)
                    .map_err(|_| TemplateError::not_found(name)),
                None => Err(err),
            },
            other => other,
        }
    }
}

fn migrate_error(path: &Path) -> impl FnOnce(FsError) -> GenerateError {
    let path = path.to_path_buf();
    move |source| GenerateError::Migrate { path, source }
}
