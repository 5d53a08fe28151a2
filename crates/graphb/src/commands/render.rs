use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphb::Operation;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct RenderCmd {
    #[arg(
        default_values_t=["json".to_string()],
        help="Set of file extensions to filter to when searching for \
             operation description files within a directory.",
        long,
        value_delimiter = ',',
    )]
    file_exts: Vec<String>,

    #[arg(
        help="Print each document wrapped in a JSON request body \
             (`{\"query\":\"...\"}`) instead of the bare document.",
        long,
    )]
    request_json: bool,

    #[arg(
        help="Paths to one or more operation description files (JSON) or \
             directories containing them.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

impl RenderCmd {
    /// Find every file at or under the input paths whose extension is one of
    /// `file_exts`.
    fn find_files(
        &self,
        file_exts: &HashSet<String>,
        errors: &mut Vec<anyhow::Error>,
    ) -> Vec<PathBuf> {
        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );

        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }

                        log::trace!("Found file at {path:#?}.");
                        if let Some(ext) = path.extension().map(|s| s.to_string_lossy())
                            && file_exts.contains(&*ext) {
                            file_paths.push(path.to_path_buf());
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.into());
                    },
                }
            }
        }

        // A single explicitly named file is rendered even if its extension
        // isn't one of `file_exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to render {first_arg_path:#?} even though it \
                doesn't match any of the --file-exts ({}).",
                file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.to_owned());
        }

        file_paths
    }

    fn render_file(&self, path: &Path) -> anyhow::Result<String> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failure reading {path:#?}"))?;
        let operation: Operation = serde_json::from_str(&contents)
            .with_context(|| format!("Failure parsing operation description in {path:#?}"))?;

        if self.request_json {
            operation.to_request_json()
                .with_context(|| format!("Failure building request body for {path:#?}"))
        } else {
            operation.validate()
                .with_context(|| format!("Invalid operation in {path:#?}"))?;
            Ok(operation.render())
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for RenderCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<anyhow::Error> = vec![];

        let file_exts: HashSet<String> =
            self.file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        let file_paths = self.find_files(&file_exts, &mut errors);
        log::debug!(
            "Found {} operation description files to render.",
            file_paths.len(),
        );

        let mut documents = vec![];
        for path in &file_paths {
            match self.render_file(path) {
                Ok(document) => {
                    log::trace!("Rendered {path:#?}.");
                    documents.push(document);
                },
                Err(e) => errors.push(e),
            }
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors rendering operations:\n{}",
                output_utils::RED_X,
                errors.iter()
                    .map(|e| format!("  * {e:#}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ));
        }

        log::info!(
            "{} Rendered {} operations.",
            output_utils::GREEN_CHECK,
            documents.len(),
        );
        CommandResult::stdout(format_args!("{}", documents.join("\n")))
    }
}
