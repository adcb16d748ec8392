// server/src/cli/handlers.rs

// Implementations of the CLI subcommands. Each handler loads what it needs
// from the resolved configuration, does its work, and prints a report.
use anyhow::{anyhow, bail, Context, Result};
use colored::{ColoredString, Colorize};
use std::fmt::Write as _;
use std::path::Path;
use tokio::sync::oneshot;
use tracing::{info, warn};
use triage_lib::classifier::is_allowed_image_path;
use triage_lib::classifier::ALLOWED_IMAGE_EXTENSIONS;
use triage_lib::{build_engine, select_rule, SeverityRule, TriageConfig, TriageEngine};
use triage_models::{
    AlertLevel, Bleeding, ClassificationResult, Coordinate, PainLevel, RankedFacility,
    SeverityAssessment, SeverityTier, SymptomReport,
};

fn engine_for(config: &TriageConfig) -> Result<TriageEngine> {
    build_engine(config).context("Failed to build triage engine")
}

fn paint_tier(tier: SeverityTier) -> ColoredString {
    let title = tier.title().bold();
    match tier.alert_level() {
        AlertLevel::Success => title.green(),
        AlertLevel::Warning => title.yellow(),
        AlertLevel::Destructive => title.red(),
    }
}

/// Renders an assessment for the terminal.
pub fn format_assessment(
    label: &str,
    symptoms: &SymptomReport,
    rule: SeverityRule,
    assessment: &SeverityAssessment,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Wound: {} (pain {}, bleeding {}, swelling {})",
        label,
        symptoms.pain,
        symptoms.bleeding.as_str(),
        if symptoms.swelling { "yes" } else { "no" }
    );
    let _ = writeln!(out, "Severity: {} [{}]", paint_tier(assessment.severity), assessment.severity);
    let _ = writeln!(out, "Rule: #{} {:?}", rule.position(), rule);
    let _ = writeln!(out, "Recommendation: {}", assessment.recommendation);
    out
}

/// Renders a ranked facility list, with map and directions links.
pub fn format_facilities(ranked: &[RankedFacility], origin: Coordinate) -> String {
    if ranked.is_empty() {
        return "No matching facilities found.\n".to_string();
    }
    let mut out = String::new();
    for (idx, entry) in ranked.iter().enumerate() {
        let facility = &entry.facility;
        let _ = writeln!(
            out,
            "{}. {} ({}) - {:.2} mi",
            idx + 1,
            facility.name.bold(),
            facility.tier,
            entry.distance
        );
        if let Some(address) = &facility.address {
            let _ = writeln!(out, "   {}", address);
        }
        if let Some(phone) = &facility.phone {
            let _ = writeln!(out, "   {}", phone);
        }
        let _ = writeln!(out, "   Map: {}", entry.maps_url());
        let _ = writeln!(out, "   Directions: {}", entry.directions_url(origin));
    }
    out
}

pub fn format_classification(path: &Path, result: &ClassificationResult) -> String {
    format!(
        "{}: {} (confidence {:.0}%)\n",
        path.display(),
        result.label.bold(),
        result.confidence * 100.0
    )
}

fn origin_from(lat: Option<f64>, lng: Option<f64>) -> Result<Option<Coordinate>> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => Ok(Some(Coordinate::new(lat, lng)?)),
        (None, None) => Ok(None),
        _ => Err(anyhow!("--lat and --lng must be given together")),
    }
}

/// Starts the REST API and blocks until Ctrl-C.
pub async fn handle_serve(mut config: TriageConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.rest.host = host;
    }
    if let Some(port) = port {
        config.rest.port = port;
    }
    config.validate()?;

    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            return;
        }
        info!("Received Ctrl-C, shutting down REST API.");
        let _ = tx.send(());
    });

    println!("Starting triage REST API on http://{}", config.bind_address());
    rest_api::start_server(&config, rx).await
}

pub fn handle_assess(
    config: &TriageConfig,
    label: &str,
    pain: i64,
    bleeding: Bleeding,
    swelling: bool,
    lat: Option<f64>,
    lng: Option<f64>,
) -> Result<String> {
    let origin = origin_from(lat, lng)?;
    let pain = PainLevel::with_policy(pain, config.engine.pain_policy)?;
    let symptoms = SymptomReport::new(pain, bleeding, swelling);

    let engine = engine_for(config)?;
    let rule = select_rule(label, &symptoms);
    let assessment = engine.assess(label, &symptoms);
    let mut report = format_assessment(label, &symptoms, rule, &assessment);

    match origin {
        Some(origin) if assessment.severity.needs_facility() => {
            let ranked = engine.find_facilities(Some(assessment.severity), origin);
            report.push_str("\nNearby facilities:\n");
            report.push_str(&format_facilities(&ranked, origin));
        }
        Some(_) => report.push_str("\nHome care is appropriate; no facility search needed.\n"),
        None => {}
    }
    Ok(report)
}

pub fn handle_facilities(config: &TriageConfig, tier: &str, lat: f64, lng: f64) -> Result<String> {
    let origin = Coordinate::new(lat, lng)?;
    let requested = SeverityTier::parse_requested(tier);
    if requested.is_none() {
        warn!("Unknown tier '{}', searching all facilities", tier);
    }
    let engine = engine_for(config)?;
    Ok(format_facilities(&engine.find_facilities(requested, origin), origin))
}

pub fn handle_classify(config: &TriageConfig, image: &Path) -> Result<String> {
    if !is_allowed_image_path(image) {
        bail!(
            "Unsupported image '{}': expected one of {}",
            image.display(),
            ALLOWED_IMAGE_EXTENSIONS.join(", ")
        );
    }
    let bytes = std::fs::read(image)
        .with_context(|| format!("Failed to read image {}", image.display()))?;
    let engine = engine_for(config)?;
    let result = engine.classify(&bytes)?;
    Ok(format_classification(image, &result))
}
