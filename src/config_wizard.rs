//! Interactive configuration wizard for creating `maquette.toml`.
//!
//! The wizard collects document metadata, theme inputs, and output paths
//! through a series of prompts, then writes `maquette.toml` to the current
//! directory. Cover styling is left at the built-in defaults; it is edited
//! by hand in the generated file.

use crate::author::AuthorList;
use crate::config::{Configuration, Document, Outline};
use crate::cover::CoverConfig;
use crate::fonts::{FontConfig, FontSpec, FontWeight};
use crate::theme::Color;
use anyhow::{Context, Result};
use chrono::Datelike;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, FuzzySelect, Input};
use std::path::PathBuf;

const LANGUAGES: &[&str] = &["fr", "en", "de", "es", "it", "nl", "pt"];

/// Run the interactive configuration wizard.
pub fn run() -> Result<()> {
    let theme = ColorfulTheme {
        ..ColorfulTheme::default()
    };

    let title: String = Input::with_theme(&theme)
        .with_prompt("Document title")
        .allow_empty(false)
        .interact()
        .with_context(|| "Failed to obtain title")?;

    let subtitle: String = Input::with_theme(&theme)
        .with_prompt("Subtitle (leave empty for none)")
        .allow_empty(true)
        .interact()?;
    let subtitle = (!subtitle.trim().is_empty()).then_some(subtitle);

    let mut authors: Vec<String> = Vec::default();
    'authors: loop {
        if !authors.is_empty() {
            println!("Authors: [{}]", authors.join("], ["));
        }
        let author: String = Input::with_theme(&theme)
            .with_prompt("Author (leave empty for done)")
            .allow_empty(true)
            .interact()?;
        if author.trim().is_empty() {
            break 'authors;
        }
        authors.push(author);
    }

    let affiliation: String = Input::with_theme(&theme)
        .with_prompt("Affiliation (leave empty for none)")
        .allow_empty(true)
        .interact()?;
    let affiliation = (!affiliation.trim().is_empty()).then_some(affiliation);

    let class: String = Input::with_theme(&theme)
        .with_prompt("Class or course label (leave empty for none)")
        .allow_empty(true)
        .interact()?;
    let class = (!class.trim().is_empty()).then_some(class);

    let main_color: String = Input::with_theme(&theme)
        .with_prompt("Primary color (6-digit hex)")
        .default("E94845".to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            input.parse::<Color>().map(|_| ()).map_err(|e| e.to_string())
        })
        .interact()?;
    let main_color: Color = main_color.parse()?;

    let lang_idx = FuzzySelect::with_theme(&theme)
        .with_prompt("Document language")
        .items(LANGUAGES)
        .default(0)
        .interact()?;
    let lang = LANGUAGES[lang_idx].to_string();

    let fonts = if Confirm::with_theme(&theme)
        .with_prompt("Do you want to customize fonts?")
        .default(false)
        .interact()?
    {
        prompt_fonts(&theme)?
    } else {
        FontConfig::default()
    };

    let mut highlights: Vec<String> = Vec::default();
    'highlights: loop {
        if !highlights.is_empty() {
            println!("Highlighted terms: [{}]", highlights.join("], ["));
        }
        let term: String = Input::with_theme(&theme)
            .with_prompt("Term to highlight in the body (leave empty for done)")
            .allow_empty(true)
            .interact()?;
        if term.is_empty() {
            break 'highlights;
        }
        highlights.push(term);
    }

    let start_date: String = Input::with_theme(&theme)
        .with_prompt("Start date, YYYY-MM-DD (leave empty for none)")
        .allow_empty(true)
        .interact()?;
    let start_date = (!start_date.trim().is_empty()).then_some(start_date);

    let updated_date: String = Input::with_theme(&theme)
        .with_prompt("Last-updated date, YYYY-MM-DD (leave empty for none)")
        .allow_empty(true)
        .interact()?;
    let updated_date = (!updated_date.trim().is_empty()).then_some(updated_date);

    let logo: String = Input::with_theme(&theme)
        .with_prompt("Logo image path (leave empty for none)")
        .allow_empty(true)
        .interact()?;
    let logo = (!logo.trim().is_empty()).then(|| PathBuf::from(logo));

    let running_header = Confirm::with_theme(&theme)
        .with_prompt("Show a running header with the title?")
        .default(false)
        .interact()?;

    let outline = if Confirm::with_theme(&theme)
        .with_prompt("Include a table of contents?")
        .default(true)
        .interact()?
    {
        Outline::Default
    } else {
        Outline::Suppressed
    };

    let body: String = Input::with_theme(&theme)
        .with_prompt("Body markup file")
        .default("body.typ".to_string())
        .interact()?;

    let outfile: String = Input::with_theme(&theme)
        .with_prompt("Output file")
        .default("report.typ".to_string())
        .interact()?;

    let config = Configuration {
        document: Document {
            title,
            subtitle,
            author: AuthorList::Many(authors),
            affiliation,
            year: chrono::Local::now().year(),
            class,
            start_date,
            updated_date,
            logo,
            main_color,
            highlights,
            fonts,
            running_header,
            lang,
            outline,
        },
        cover: CoverConfig::default(),
        body: PathBuf::from(body),
        outfile: PathBuf::from(outfile),
    };

    let config = toml::to_string_pretty(&config)
        .with_context(|| "Failed to convert configuration to TOML")?;

    let config_path = PathBuf::from("maquette.toml");
    if config_path.exists()
        && !Confirm::with_theme(&theme)
            .with_prompt("maquette.toml already exists, do you want to override it?")
            .interact()?
    {
        println!("Configuration:");
        println!("{}", config);
    } else {
        std::fs::write("maquette.toml", config)
            .with_context(|| "Failed to write configuration file")?;
        println!("maquette.toml written!");
    }

    Ok(())
}

fn prompt_fonts(theme: &ColorfulTheme) -> Result<FontConfig> {
    let default_name: String = Input::with_theme(theme)
        .with_prompt("Default font family")
        .default("Libertinus Serif".to_string())
        .interact()?;

    let title_name: String = Input::with_theme(theme)
        .with_prompt("Title font family (leave empty to use the default font)")
        .allow_empty(true)
        .interact()?;

    let body_name: String = Input::with_theme(theme)
        .with_prompt("Body font family (leave empty to use the default font)")
        .allow_empty(true)
        .interact()?;

    let code_name: String = Input::with_theme(theme)
        .with_prompt("Code font family")
        .default("DejaVu Sans Mono".to_string())
        .interact()?;

    let spec = |name: String| FontSpec::new(name, FontWeight::named("regular"));
    Ok(FontConfig {
        default: spec(default_name),
        title: (!title_name.trim().is_empty()).then(|| spec(title_name)),
        body: (!body_name.trim().is_empty()).then(|| spec(body_name)),
        code: spec(code_name),
    })
}
