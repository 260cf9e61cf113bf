//! Rendering of a comparison: pretty terminal report or JSON document.

use crate::cli_style::{colors, paint, paint_bold, print_section_header, render_bar, score_color};
use crate::compat::CompatibilityReport;
use crate::config::{AppConfig, OutputFormat};
use crate::listening::Profile;
use anyhow::Result;
use serde::Serialize;

/// How many of each user's top genres the profile summary shows.
const SUMMARY_GENRES: usize = 5;

#[derive(Serialize)]
struct JsonReport<'a> {
    profile_a: &'a str,
    profile_b: &'a str,
    #[serde(flatten)]
    report: &'a CompatibilityReport,
}

/// Emits the report in the configured format.
pub fn print_report(
    a: &Profile,
    b: &Profile,
    report: &CompatibilityReport,
    config: &AppConfig,
) -> Result<()> {
    match config.output {
        OutputFormat::Json => print_json(a, b, report),
        OutputFormat::Pretty => {
            print_pretty(a, b, report, config);
            Ok(())
        }
    }
}

fn print_json(a: &Profile, b: &Profile, report: &CompatibilityReport) -> Result<()> {
    let document = JsonReport {
        profile_a: &a.display_name,
        profile_b: &b.display_name,
        report,
    };
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

fn print_pretty(a: &Profile, b: &Profile, report: &CompatibilityReport, config: &AppConfig) {
    let color = config.color;

    print_section_header("TASTE MATCH", color);
    println!(
        " {} × {}",
        paint_bold(&a.display_name, colors::MAGENTA, color),
        paint_bold(&b.display_name, colors::MAGENTA, color),
    );
    println!(
        " {} {}",
        paint(&render_bar(report.score, config.bar_width), score_color(report.score), color),
        paint_bold(
            &format!("{} / 100", report.score),
            score_color(report.score),
            color
        ),
    );

    print_section_header("BREAKDOWN", color);
    let rows = [
        ("Genre mix", report.breakdown.genres),
        ("Top genres", report.breakdown.ranked_genres),
        ("Artists", report.breakdown.artists),
        ("Tracks", report.breakdown.tracks),
        ("Popularity", report.breakdown.popularity),
    ];
    for (label, value) in rows {
        println!(
            " {} {} {:>3}",
            paint(&format!("{:<12}", label), colors::WHITE, color),
            paint(&render_bar(value, config.bar_width), score_color(value), color),
            value,
        );
    }

    print_section_header("IN COMMON", color);
    print_shared_list(
        "Genres",
        &report
            .shared_genres
            .iter()
            .map(|g| g.to_string())
            .collect::<Vec<_>>(),
        color,
    );
    print_shared_list("Artists", &report.shared_artists, color);
    print_shared_list("Tracks", &report.shared_tracks, color);

    print_section_header("PROFILES", color);
    print_profile_summary(a, color);
    print_profile_summary(b, color);
    println!();
}

fn print_shared_list(label: &str, items: &[String], color: bool) {
    let padded = format!("{:<8}", label);
    if items.is_empty() {
        println!(
            " {} {}",
            paint(&padded, colors::WHITE, color),
            paint("nothing shared", colors::DIM, color)
        );
    } else {
        println!(" {} {}", paint(&padded, colors::WHITE, color), items.join(", "));
    }
}

fn print_profile_summary(profile: &Profile, color: bool) {
    let genres: Vec<String> = profile
        .top_genres
        .iter()
        .take(SUMMARY_GENRES)
        .map(|g| g.to_string())
        .collect();
    let genres_line = if genres.is_empty() {
        "no genre data".to_string()
    } else {
        genres.join(", ")
    };
    println!(
        " {} {} {}",
        paint_bold(&profile.display_name, colors::MAGENTA, color),
        paint("—", colors::DIM, color),
        genres_line,
    );
    println!(
        "   {}",
        paint(
            &format!("mainstream taste {:.0}/100", profile.avg_popularity),
            colors::DIM,
            color
        ),
    );
}
