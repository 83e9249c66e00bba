use std::path::{Path, PathBuf};

use clap::Parser;
use draftsmith_cli::cli::Cli;
use draftsmith_cli::commands::run;
use draftsmith_cli::config::{DraftsmithConfig, save_config};
use draftsmith_core::models::snippet::SnippetSet;

const BRIEF: &str = r#"{
  "problem": "Dashboards nobody reads",
  "audience": "Heads of data",
  "povBullets": ["Decide first", "", "One metric per page", "Retire reports"],
  "evidence": ["", "Internal survey"],
  "cta": "Book an audit",
  "tone": "Thought Leadership"
}"#;

const RAW: &str = "## Blog Draft\nMost dashboards are never opened twice.\n\n## LinkedIn Post\nYour dashboard is lying.\n\n## Footnotes / Sources\n[1] Internal survey";

const SNIPPETS: &str = r#"Here you go:
{
  "pullQuotes": ["Decide first.", "One metric per page.", "Retire reports."],
  "anonymizedExamples": ["A retailer cut 40 reports.", "A bank merged dashboards."],
  "socialHooks": ["h1", "h2", "h3, with comma", "h4", "h5"],
  "tags": ["analytics", "reporting", "strategy"],
  "notes": null
}"#;

struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = DraftsmithConfig {
            config_version: 1,
            data_dir: dir.path().join("data"),
            export_dir: Some(dir.path().join("exports")),
            created_at: "2025-01-01T00:00:00Z".parse().unwrap(),
        };
        save_config(&dir.path().join("config.json"), &config).unwrap();

        std::fs::write(dir.path().join("brief.json"), BRIEF).unwrap();
        std::fs::write(dir.path().join("raw.md"), RAW).unwrap();
        std::fs::write(dir.path().join("snippets.txt"), SNIPPETS).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn run(&self, args: &[&str]) -> eyre::Result<String> {
        let config = self.path("config.json");
        let mut argv = vec![
            "draftsmith".to_string(),
            "--config".to_string(),
            config.display().to_string(),
        ];
        argv.extend(args.iter().map(|a| a.to_string()));
        let cli = Cli::try_parse_from(argv)?;

        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn arg(&self, name: &str) -> String {
        self.path(name).display().to_string()
    }

    fn save_snippets(&self) -> eyre::Result<String> {
        self.run(&[
            "save",
            "--snippets",
            &self.arg("snippets.txt"),
            "--source",
            &self.arg("raw.md"),
            "--brief",
            &self.arg("brief.json"),
        ])
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn validate_reports_fields_and_fails_when_incomplete() {
    let ws = Workspace::new();
    let out = ws.run(&["validate", &ws.arg("brief.json")]).unwrap();
    assert!(out.contains("\"is_valid\": true"));

    std::fs::write(
        ws.path("thin.json"),
        r#"{"problem": "", "audience": "a", "pov_bullets": ["1"], "cta": "c"}"#,
    )
    .unwrap();
    let err = ws.run(&["validate", &ws.arg("thin.json")]).unwrap_err();
    assert!(err.to_string().contains("problem, pov_bullets"));
}

#[test]
fn parse_prints_sections_as_json() {
    let ws = Workspace::new();
    let out = ws.run(&["parse", &ws.arg("raw.md")]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["blog_draft"], "Most dashboards are never opened twice.");
    assert_eq!(value["linkedin_post"], "Your dashboard is lying.");
    assert_eq!(value["footnotes"], "[1] Internal survey");
}

#[test]
fn parse_stats_and_bundle() {
    let ws = Workspace::new();
    let out = ws.run(&["parse", &ws.arg("raw.md"), "--stats"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["blog_draft_stats"]["words"], 6);
    assert_eq!(value["blog_draft_stats"]["reading_minutes"], 1);
    assert_eq!(value["has_citations"], true);

    let bundle = ws.run(&["parse", &ws.arg("raw.md"), "--bundle"]).unwrap();
    assert!(bundle.starts_with("## Blog Draft\nMost dashboards"));
}

#[test]
fn parse_writes_section_markdown_files() {
    let ws = Workspace::new();
    let sections = ws.path("sections");
    ws.run(&[
        "parse",
        &ws.arg("raw.md"),
        "--sections-out",
        &sections.display().to_string(),
    ])
    .unwrap();

    assert_eq!(
        read(&sections.join("blog-draft.md")),
        "Most dashboards are never opened twice."
    );
    assert_eq!(read(&sections.join("linkedin-post.md")), "Your dashboard is lying.");
    assert_eq!(read(&sections.join("footnotes.md")), "[1] Internal survey");
}

#[test]
fn save_list_and_reject_duplicate() {
    let ws = Workspace::new();
    let id = ws.save_snippets().unwrap().trim().to_string();

    let listed = ws.run(&["list"]).unwrap();
    assert!(listed.contains(&id));
    assert!(listed.contains("Decide first."));
    assert!(listed.contains("[analytics, reporting, strategy]"));

    let err = ws.save_snippets().unwrap_err();
    assert!(err.to_string().contains("already saved"));
    assert_eq!(ws.run(&["list"]).unwrap().lines().count(), 1);
}

#[test]
fn saved_set_snapshots_normalized_brief() {
    let ws = Workspace::new();
    ws.save_snippets().unwrap();

    let library = read(&ws.path("data").join("snippets.json"));
    let sets: Vec<SnippetSet> = serde_json::from_str(&library).unwrap();
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].brief.pov_bullets.len(), 3);
    assert_eq!(sets[0].brief.evidence, vec!["Internal survey".to_string()]);
    assert_eq!(
        sets[0].draft_hash,
        draftsmith_core::hash::fingerprint("Most dashboards are never opened twice.")
    );
}

#[test]
fn save_rejects_malformed_snippets() {
    let ws = Workspace::new();
    std::fs::write(
        ws.path("bad.json"),
        r#"{"pullQuotes": ["a"], "anonymizedExamples": ["x", "y"], "socialHooks": ["1","2","3","4","5"], "tags": ["t1","t2","t3"]}"#,
    )
    .unwrap();

    let err = ws
        .run(&[
            "save",
            "--snippets",
            &ws.arg("bad.json"),
            "--source",
            &ws.arg("raw.md"),
            "--brief",
            &ws.arg("brief.json"),
        ])
        .unwrap_err();
    assert!(err.to_string().contains("pull_quotes must have exactly 3 items, got 1"));
    assert!(ws.run(&["list"]).unwrap().is_empty());
}

#[test]
fn search_tags_and_delete() {
    let ws = Workspace::new();
    let id = ws.save_snippets().unwrap().trim().to_string();

    assert!(ws.run(&["search", "--term", "REPORT"]).unwrap().contains(&id));
    assert!(ws.run(&["search", "--tag", "strategy"]).unwrap().contains(&id));
    assert!(ws.run(&["search", "--tag", "people"]).unwrap().is_empty());
    assert_eq!(ws.run(&["tags"]).unwrap(), "analytics\nreporting\nstrategy\n");

    assert_eq!(ws.run(&["delete", &id]).unwrap(), format!("deleted {id}\n"));
    assert!(ws.run(&["list"]).unwrap().is_empty());
    assert_eq!(ws.run(&["delete", &id]).unwrap(), format!("no snippet set {id}\n"));
}

#[test]
fn export_writes_named_files() {
    let ws = Workspace::new();
    let id = ws.save_snippets().unwrap().trim().to_string();

    let path = ws.run(&["export", "hooks", &id]).unwrap();
    let hooks = PathBuf::from(path.trim());
    assert_eq!(hooks, ws.path("exports").join(format!("hooks-{id}.csv")));
    assert_eq!(read(&hooks), "h1\nh2\n\"h3, with comma\"\nh4\nh5");

    let out_dir = ws.path("elsewhere");
    let path = ws
        .run(&["export", "quotes", &id, "--out", &out_dir.display().to_string()])
        .unwrap();
    assert_eq!(
        read(Path::new(path.trim())),
        "Decide first.\n\nOne metric per page.\n\nRetire reports."
    );

    let path = ws.run(&["export", "snippets", &id]).unwrap();
    let set: SnippetSet = serde_json::from_str(&read(Path::new(path.trim()))).unwrap();
    assert_eq!(set.id.to_string(), id);
}

#[test]
fn export_rejects_unknown_kind_and_id() {
    let ws = Workspace::new();
    let id = ws.save_snippets().unwrap().trim().to_string();
    assert!(ws.run(&["export", "pdf", &id]).is_err());
    assert!(
        ws.run(&["export", "hooks", "00000000-0000-0000-0000-000000000000"])
            .is_err()
    );
}

#[test]
fn export_unsaved_snippets_leaves_library_empty() {
    let ws = Workspace::new();
    let out_dir = ws.path("unsaved");
    let path = ws
        .run(&[
            "export",
            "snippets",
            "--snippets",
            &ws.arg("snippets.txt"),
            "--brief",
            &ws.arg("brief.json"),
            "--out",
            &out_dir.display().to_string(),
        ])
        .unwrap();

    let set: SnippetSet = serde_json::from_str(&read(Path::new(path.trim()))).unwrap();
    assert_eq!(
        Path::new(path.trim()),
        out_dir.join(format!("snippets-{}.json", set.id))
    );
    assert_eq!(set.draft_hash, "");
    assert_eq!(set.source_title, "Decide first.");
    assert_eq!(set.brief.audience, "Heads of data");
    assert_eq!(set.brief.pov_bullets.len(), 3);

    let path = ws
        .run(&["export", "hooks", "--snippets", &ws.arg("snippets.txt")])
        .unwrap();
    assert_eq!(read(Path::new(path.trim())), "h1\nh2\n\"h3, with comma\"\nh4\nh5");

    assert!(ws.run(&["list"]).unwrap().is_empty());
    assert!(!ws.path("data").join("snippets.json").exists());
}

#[test]
fn export_needs_an_id_or_snippets() {
    let ws = Workspace::new();
    assert!(ws.run(&["export", "hooks"]).is_err());

    let id = ws.save_snippets().unwrap().trim().to_string();
    assert!(
        ws.run(&["export", "hooks", &id, "--snippets", &ws.arg("snippets.txt")])
            .is_err()
    );
}

#[test]
fn partial_brief_is_stored_and_reported_field_by_field() {
    let ws = Workspace::new();
    std::fs::write(ws.path("partial.json"), r#"{"problem": "p"}"#).unwrap();

    let out = ws.run(&["brief", "save", &ws.arg("partial.json")]).unwrap();
    let flags: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(flags["problem"], true);
    assert_eq!(flags["audience"], false);
    assert_eq!(flags["pov_bullets"], false);
    assert_eq!(flags["cta"], false);
    assert_eq!(flags["is_valid"], false);

    let err = ws.run(&["validate", &ws.arg("partial.json")]).unwrap_err();
    assert!(err.to_string().contains("audience, pov_bullets, cta"));
    let err = ws.run(&["validate"]).unwrap_err();
    assert!(err.to_string().contains("audience, pov_bullets, cta"));
}

#[test]
fn brief_draft_commands_feed_validate_and_save() {
    let ws = Workspace::new();
    assert_eq!(ws.run(&["brief", "show"]).unwrap(), "no brief draft saved\n");
    assert!(ws.run(&["validate"]).is_err());

    ws.run(&["brief", "save", &ws.arg("brief.json")]).unwrap();
    let shown = ws.run(&["brief", "show"]).unwrap();
    assert!(shown.contains("Authoritative, visionary, provocative"));
    assert!(ws.run(&["validate"]).unwrap().contains("\"is_valid\": true"));

    let saved = ws
        .run(&[
            "save",
            "--snippets",
            &ws.arg("snippets.txt"),
            "--source",
            &ws.arg("raw.md"),
        ])
        .unwrap();
    assert!(!saved.trim().is_empty());

    assert_eq!(ws.run(&["brief", "clear"]).unwrap(), "brief draft cleared\n");
    assert_eq!(ws.run(&["brief", "show"]).unwrap(), "no brief draft saved\n");
}

#[test]
fn data_dir_flag_overrides_config() {
    let ws = Workspace::new();
    let other = ws.path("other-data");
    ws.run(&["--data-dir", &other.display().to_string(), "brief", "save", &ws.arg("brief.json")])
        .unwrap();

    assert!(other.join("brief.json").exists());
    assert!(!ws.path("data").join("brief.json").exists());
}

#[test]
fn config_show_and_init() {
    let ws = Workspace::new();
    let shown = ws.run(&["config", "show"]).unwrap();
    assert!(shown.contains("\"config_version\": 1"));
    assert!(ws.run(&["config", "init"]).is_err());
}
