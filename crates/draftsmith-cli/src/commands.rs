//! Command handlers. Each writes its result to `out`; logs go to stderr.

use std::io::Write;
use std::path::{Path, PathBuf};

use draftsmith_core::extract::parse_extraction_response;
use draftsmith_core::models::brief::Brief;
use draftsmith_core::models::output::ParsedOutput;
use draftsmith_core::models::snippet::{ExtractedSnippets, SnippetSet};
use draftsmith_core::parse::parse_output;
use draftsmith_core::text::{has_citations, reading_time_minutes, word_count};
use draftsmith_core::validate::{BriefValidation, validate_brief};
use draftsmith_export::formats::{ExportFile, export};
use draftsmith_export::render::{render_bundle, section_markdown};
use draftsmith_storage::library::SaveOutcome;
use eyre::{Result, WrapErr, bail};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::cli::{
    BriefCommand, Cli, Command, ConfigCommand, DeleteArgs, ExportArgs, ParseArgs, SaveArgs,
    SearchArgs, ValidateArgs,
};
use crate::config::{self, DraftsmithConfig};
use crate::state::AppState;

pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let mut config = config::load_or_default(&config_path)?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    match cli.command {
        Command::Config(args) => match args.command {
            ConfigCommand::Show => print_json(out, &config),
            ConfigCommand::Init => init_config(&config_path, &config, out),
        },
        command => {
            let state = AppState::open(&config);
            dispatch(&state, command, out)
        }
    }
}

pub fn dispatch(state: &AppState, command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Validate(args) => validate(state, args, out),
        Command::Parse(args) => parse(args, out),
        Command::Save(args) => save(state, args, out),
        Command::List => list(state, out),
        Command::Search(args) => search(state, args, out),
        Command::Tags => tags(state, out),
        Command::Delete(args) => delete(state, args, out),
        Command::Export(args) => export_set(state, args, out),
        Command::Brief(args) => match args.command {
            BriefCommand::Save { file } => save_brief_draft(state, &file, out),
            BriefCommand::Show => show_brief_draft(state, out),
            BriefCommand::Clear => clear_brief_draft(state, out),
        },
        Command::Config(_) => bail!("config commands do not need the data stores"),
    }
}

fn validate(state: &AppState, args: ValidateArgs, out: &mut impl Write) -> Result<()> {
    let brief = resolve_brief(state, args.brief.as_deref())?;
    let validation = validate_brief(&brief);
    print_json(out, &validation)?;
    if !validation.is_valid {
        bail!(
            "brief is incomplete: {}",
            validation.invalid_fields().join(", ")
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct SectionStats {
    words: usize,
    reading_minutes: usize,
}

impl SectionStats {
    fn of(text: &str) -> Self {
        let words = word_count(text);
        Self {
            words,
            reading_minutes: reading_time_minutes(words),
        }
    }
}

#[derive(Serialize)]
struct ParseReport<'a> {
    #[serde(flatten)]
    parsed: &'a ParsedOutput,
    blog_draft_stats: SectionStats,
    linkedin_post_stats: SectionStats,
    has_citations: bool,
}

fn parse(args: ParseArgs, out: &mut impl Write) -> Result<()> {
    let raw = read_file(&args.raw)?;
    let parsed = parse_output(&raw);
    if parsed.is_empty() {
        tracing::warn!(path = %args.raw.display(), "no recognized sections in document");
    }

    if let Some(dir) = &args.sections_out {
        for (title, content) in [
            ("Blog Draft", &parsed.blog_draft),
            ("LinkedIn Post", &parsed.linkedin_post),
            ("Footnotes", &parsed.footnotes),
        ] {
            if content.trim().is_empty() {
                continue;
            }
            write_export(dir, &section_markdown(title, content))?;
        }
    }

    if args.bundle {
        write!(out, "{}", render_bundle(&parsed)?)?;
        return Ok(());
    }

    if args.stats {
        let report = ParseReport {
            parsed: &parsed,
            blog_draft_stats: SectionStats::of(&parsed.blog_draft),
            linkedin_post_stats: SectionStats::of(&parsed.linkedin_post),
            has_citations: has_citations(&parsed.footnotes),
        };
        return print_json(out, &report);
    }

    print_json(out, &parsed)
}

fn save(state: &AppState, args: SaveArgs, out: &mut impl Write) -> Result<()> {
    let candidate = read_candidate(&args.snippets)?;
    let brief = resolve_brief(state, args.brief.as_deref())?;
    let validation = validate_brief(&brief);
    if !validation.is_valid {
        bail!(
            "brief is incomplete: {}",
            validation.invalid_fields().join(", ")
        );
    }

    // Snippets come from the blog draft, so that is what the dedup key hashes.
    let raw = read_file(&args.source)?;
    let parsed = parse_output(&raw);
    let source_text = if parsed.blog_draft.is_empty() {
        raw.as_str()
    } else {
        parsed.blog_draft.as_str()
    };

    match state
        .library
        .save_unique(candidate, source_text, &brief.normalized())
    {
        SaveOutcome::Saved(set) => {
            info!(id = %set.id, title = %set.source_title, "snippet set saved");
            writeln!(out, "{}", set.id)?;
            Ok(())
        }
        SaveOutcome::Duplicate => bail!("these snippets are already saved to the library"),
        SaveOutcome::NotPersisted => {
            bail!("the snippet library could not be written; nothing was saved")
        }
    }
}

fn list(state: &AppState, out: &mut impl Write) -> Result<()> {
    print_sets(out, &state.library.list())
}

fn search(state: &AppState, args: SearchArgs, out: &mut impl Write) -> Result<()> {
    print_sets(out, &state.library.search(&args.term, &args.tags))
}

fn tags(state: &AppState, out: &mut impl Write) -> Result<()> {
    for tag in state.library.all_tags() {
        writeln!(out, "{tag}")?;
    }
    Ok(())
}

fn delete(state: &AppState, args: DeleteArgs, out: &mut impl Write) -> Result<()> {
    if state.library.get(args.id).is_none() {
        writeln!(out, "no snippet set {}", args.id)?;
        return Ok(());
    }
    if !state.library.delete(args.id) {
        bail!("the snippet library could not be written; {} was not deleted", args.id);
    }
    writeln!(out, "deleted {}", args.id)?;
    Ok(())
}

fn export_set(state: &AppState, args: ExportArgs, out: &mut impl Write) -> Result<()> {
    let set = match (&args.snippets, args.id) {
        (Some(path), _) => unsaved_set(state, path, args.brief.as_deref())?,
        (None, Some(id)) => state
            .library
            .get(id)
            .ok_or_else(|| eyre::eyre!("no snippet set {id}"))?,
        (None, None) => bail!("give a snippet set id or --snippets"),
    };
    let file = export(&set, args.kind)?;
    let dir = args.out.unwrap_or_else(|| state.export_dir.clone());
    let path = write_export(&dir, &file)?;
    writeln!(out, "{}", path.display())?;
    Ok(())
}

/// A throwaway set around an extractor response. It gets a fresh id and no
/// draft hash, and never touches the library.
fn unsaved_set(state: &AppState, snippets: &Path, brief: Option<&Path>) -> Result<SnippetSet> {
    let candidate = read_candidate(snippets)?;
    let brief = match brief {
        Some(path) => read_brief(path)?,
        None => state.briefs.load().unwrap_or_else(|| {
            tracing::debug!("no brief draft saved, exporting with an empty brief");
            Brief::default()
        }),
    };
    Ok(SnippetSet::new(
        Uuid::new_v4(),
        jiff::Timestamp::now(),
        brief.normalized(),
        String::new(),
        candidate,
    ))
}

fn save_brief_draft(state: &AppState, file: &Path, out: &mut impl Write) -> Result<()> {
    let brief = read_brief(file)?;
    if !state.briefs.save(&brief) {
        bail!("the brief draft could not be written");
    }
    print_json(out, &validate_brief(&brief))
}

#[derive(Serialize)]
struct BriefReport<'a> {
    brief: &'a Brief,
    validation: BriefValidation,
    tone_description: &'static str,
}

fn show_brief_draft(state: &AppState, out: &mut impl Write) -> Result<()> {
    let Some(brief) = state.briefs.load() else {
        writeln!(out, "no brief draft saved")?;
        return Ok(());
    };
    print_json(
        out,
        &BriefReport {
            brief: &brief,
            validation: validate_brief(&brief),
            tone_description: brief.tone.description(),
        },
    )
}

fn clear_brief_draft(state: &AppState, out: &mut impl Write) -> Result<()> {
    if !state.briefs.clear() {
        bail!("the brief draft could not be cleared");
    }
    writeln!(out, "brief draft cleared")?;
    Ok(())
}

fn init_config(path: &Path, config: &DraftsmithConfig, out: &mut impl Write) -> Result<()> {
    if path.exists() {
        bail!("config already exists at {}", path.display());
    }
    config::save_config(path, config)?;
    writeln!(out, "{}", path.display())?;
    Ok(())
}

fn resolve_brief(state: &AppState, path: Option<&Path>) -> Result<Brief> {
    match path {
        Some(path) => read_brief(path),
        None => state
            .briefs
            .load()
            .ok_or_else(|| eyre::eyre!("no brief given and no brief draft saved")),
    }
}

fn read_candidate(path: &Path) -> Result<ExtractedSnippets> {
    let candidate = parse_extraction_response(&read_file(path)?)
        .wrap_err_with(|| format!("reading snippets from {}", path.display()))?;
    let violations = candidate.shape_violations();
    if !violations.is_empty() {
        let reasons: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
        bail!("extracted snippets are malformed: {}", reasons.join("; "));
    }
    Ok(candidate)
}

fn read_brief(path: &Path) -> Result<Brief> {
    let json = read_file(path)?;
    serde_json::from_str(&json).wrap_err_with(|| format!("parsing brief {}", path.display()))
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).wrap_err_with(|| format!("reading {}", path.display()))
}

fn write_export(dir: &Path, file: &ExportFile) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).wrap_err_with(|| format!("creating {}", dir.display()))?;
    let path = dir.join(&file.filename);
    std::fs::write(&path, &file.bytes).wrap_err_with(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), bytes = file.bytes.len(), "file written");
    Ok(path)
}

fn print_sets(out: &mut impl Write, sets: &[SnippetSet]) -> Result<()> {
    for set in sets {
        writeln!(
            out,
            "{}  {}  {}  [{}]",
            set.id,
            set.created_at,
            set.source_title,
            set.tags.join(", ")
        )?;
    }
    Ok(())
}

fn print_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
