//! HUD label builder.
//!
//! Pure functions from simulation state to the label commands the presenter
//! renders: telemetry readouts, fail-condition messages, the mapping prompt,
//! intro text, and the fixed instruction panels. Layout is fixed to the
//! 800×645 playfield.

use glam::DVec2;
use orbiter_config::HudConfig;
use orbiter_render::{BoxedLabelCmd, Color, LabelCmd, Rect};

use crate::satellite::Satellite;
use crate::sim::FailStatus;

/// Everything the HUD wants drawn this tick.
#[derive(Debug, Clone, Default)]
pub struct HudFrame {
    pub labels: Vec<LabelCmd>,
    pub boxes: Vec<BoxedLabelCmd>,
}

/// Telemetry readout layout: header row at y=20, value row at y=50.
const DX_HEADER: Rect = Rect::new(70.0, 20.0, 75.0, 20.0);
const DY_HEADER: Rect = Rect::new(150.0, 20.0, 80.0, 20.0);
const ALTITUDE_HEADER: Rect = Rect::new(240.0, 20.0, 260.0, 20.0);
const FUEL_HEADER: Rect = Rect::new(410.0, 20.0, 160.0, 20.0);
const ECCENTRICITY_HEADER: Rect = Rect::new(580.0, 20.0, 150.0, 20.0);
const DX_VALUE: Rect = Rect::new(70.0, 50.0, 75.0, 20.0);
const DY_VALUE: Rect = Rect::new(150.0, 50.0, 80.0, 20.0);
const ALTITUDE_VALUE: Rect = Rect::new(240.0, 50.0, 160.0, 20.0);
const FUEL_VALUE: Rect = Rect::new(410.0, 50.0, 160.0, 20.0);
const ECCENTRICITY_VALUE: Rect = Rect::new(580.0, 50.0, 150.0, 20.0);

/// Build the full HUD for one frame.
pub fn build_frame(
    satellite: &Satellite,
    eccentricity: f64,
    fail: FailStatus,
    mapping_enabled: bool,
    show_intro: bool,
    config: &HudConfig,
) -> HudFrame {
    let mut frame = HudFrame::default();

    if let Some(message) = fail_message(fail) {
        frame.labels.push(LabelCmd {
            lines: vec![message.to_string()],
            color: Color::from_triple(config.warning),
            position: fail_position(fail),
        });
    }

    if mapping_enabled {
        frame.labels.push(LabelCmd {
            lines: vec!["Press & hold m to map moisture".to_string()],
            color: Color::from_triple(config.mapping_prompt),
            position: DVec2::new(250.0, 175.0),
        });
    }

    if show_intro {
        frame.labels.push(LabelCmd {
            lines: intro_lines(),
            color: Color::from_triple(config.intro),
            position: DVec2::new(145.0, 100.0),
        });
    }

    frame.boxes = telemetry_boxes(satellite, eccentricity);

    let panel_color = Color::from_triple(config.panel_text);
    frame.labels.push(LabelCmd {
        lines: orbit_requirement_lines(),
        color: panel_color,
        position: DVec2::new(10.0, 575.0),
    });
    frame.labels.push(LabelCmd {
        lines: control_legend_lines(),
        color: panel_color,
        position: DVec2::new(570.0, 510.0),
    });

    frame
}

/// The telemetry readout: header boxes plus formatted value boxes.
pub fn telemetry_boxes(satellite: &Satellite, eccentricity: f64) -> Vec<BoxedLabelCmd> {
    vec![
        boxed("Dx", DX_HEADER),
        boxed("Dy", DY_HEADER),
        boxed("Altitude", ALTITUDE_HEADER),
        boxed("Fuel", FUEL_HEADER),
        boxed("Eccentricity", ECCENTRICITY_HEADER),
        boxed(&format!("{:.1}", satellite.velocity.x), DX_VALUE),
        boxed(&format!("{:.1}", satellite.velocity.y), DY_VALUE),
        boxed(&format!("{:.1}", satellite.distance), ALTITUDE_VALUE),
        boxed(&format!("{}", satellite.fuel), FUEL_VALUE),
        boxed(&format!("{eccentricity:.8}"), ECCENTRICITY_VALUE),
    ]
}

fn boxed(text: &str, rect: Rect) -> BoxedLabelCmd {
    BoxedLabelCmd {
        text: text.to_string(),
        rect,
    }
}

fn fail_message(fail: FailStatus) -> Option<&'static str> {
    match fail {
        FailStatus::Nominal => None,
        FailStatus::FuelDepleted => Some("Fuel depleted"),
        FailStatus::AtmosphericEntry => Some("Atmospheric entry"),
    }
}

fn fail_position(fail: FailStatus) -> DVec2 {
    match fail {
        FailStatus::AtmosphericEntry => DVec2::new(320.0, 195.0),
        _ => DVec2::new(340.0, 195.0),
    }
}

/// Mission briefing shown for the first seconds of a run.
pub fn intro_lines() -> Vec<String> {
    vec![
        "The Mars Orbiter experienced an error during orbit insertion.".to_string(),
        "Use thrusters to correct to a circular mapping orbit without".to_string(),
        "running out of propellant or burning up in the atmosphere.".to_string(),
    ]
}

/// The mapping-orbit requirements panel.
pub fn orbit_requirement_lines() -> Vec<String> {
    vec![
        "Orbital altitude must be within 69 - 120 miles".to_string(),
        "Orbital eccentricity must be < 0.05".to_string(),
        "Avoid top of atmosphere at 68 miles".to_string(),
    ]
}

/// The control legend panel.
pub fn control_legend_lines() -> Vec<String> {
    vec![
        "Left arrow = Decrease Dx".to_string(),
        "Right arrow = Increase Dx".to_string(),
        "Up arrow = Increase Dy".to_string(),
        "Down arrow = Decrease Dy".to_string(),
        "Space bar = Clear path".to_string(),
        "Escape = Toggle full screen".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn test_satellite() -> Satellite {
        Satellite {
            position: DVec2::new(400.0, 200.0),
            velocity: DVec2::new(2.35, -0.04),
            fuel: 64,
            mass: 1.0,
            heading_deg: 90.0,
            distance: 119.96,
        }
    }

    #[test]
    fn test_telemetry_formats() {
        let boxes = telemetry_boxes(&test_satellite(), 51.0 / 189.0);
        let texts: Vec<&str> = boxes.iter().map(|b| b.text.as_str()).collect();
        assert!(texts.contains(&"2.3"));
        assert!(texts.contains(&"-0.0"));
        assert!(texts.contains(&"120.0"));
        assert!(texts.contains(&"64"));
        // Eccentricity renders at 8 decimal places.
        assert!(texts.contains(&"0.26984127"));
    }

    #[test]
    fn test_header_and_value_count() {
        let boxes = telemetry_boxes(&test_satellite(), 1.0);
        assert_eq!(boxes.len(), 10);
        assert_eq!(boxes[0].text, "Dx");
        assert_eq!(boxes[4].text, "Eccentricity");
    }

    #[test]
    fn test_fail_messages() {
        let config = HudConfig::default();
        let sat = test_satellite();

        let nominal = build_frame(&sat, 1.0, FailStatus::Nominal, false, false, &config);
        let all_lines: Vec<String> = nominal.labels.iter().flat_map(|l| l.lines.clone()).collect();
        assert!(!all_lines.iter().any(|l| l.contains("depleted")));

        let depleted = build_frame(&sat, 1.0, FailStatus::FuelDepleted, false, false, &config);
        let all_lines: Vec<String> = depleted.labels.iter().flat_map(|l| l.lines.clone()).collect();
        assert!(all_lines.contains(&"Fuel depleted".to_string()));

        let entry = build_frame(&sat, 1.0, FailStatus::AtmosphericEntry, false, false, &config);
        let all_lines: Vec<String> = entry.labels.iter().flat_map(|l| l.lines.clone()).collect();
        assert!(all_lines.contains(&"Atmospheric entry".to_string()));
    }

    #[test]
    fn test_mapping_prompt_gated() {
        let config = HudConfig::default();
        let sat = test_satellite();

        let hidden = build_frame(&sat, 1.0, FailStatus::Nominal, false, false, &config);
        assert!(!hidden
            .labels
            .iter()
            .any(|l| l.lines.iter().any(|line| line.contains("map moisture"))));

        let shown = build_frame(&sat, 0.04, FailStatus::Nominal, true, false, &config);
        assert!(shown
            .labels
            .iter()
            .any(|l| l.lines.iter().any(|line| line.contains("map moisture"))));
    }

    #[test]
    fn test_intro_visibility() {
        let config = HudConfig::default();
        let sat = test_satellite();

        let with_intro = build_frame(&sat, 1.0, FailStatus::Nominal, false, true, &config);
        let without = build_frame(&sat, 1.0, FailStatus::Nominal, false, false, &config);
        assert_eq!(with_intro.labels.len(), without.labels.len() + 1);
    }

    #[test]
    fn test_panels_always_present() {
        let config = HudConfig::default();
        let frame = build_frame(&test_satellite(), 1.0, FailStatus::Nominal, false, false, &config);
        let all_lines: Vec<String> = frame.labels.iter().flat_map(|l| l.lines.clone()).collect();
        assert!(all_lines.iter().any(|l| l.contains("69 - 120 miles")));
        assert!(all_lines.iter().any(|l| l.contains("Space bar")));
    }
}
