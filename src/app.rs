use crate::config::Config;
use crate::report::Report;
use crate::timing::{
    bezier::EasingCurve,
    intervals::{CalculationRequest, MAX_OBJECTS},
};
use crate::validate::{self, InputError};
use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EasingMode {
    EaseIn,
    EaseOut,
    EaseInOut,
    Custom,
}

impl EasingMode {
    pub fn label(self) -> &'static str {
        match self {
            EasingMode::EaseIn => "Ease In",
            EasingMode::EaseOut => "Ease Out",
            EasingMode::EaseInOut => "Ease In-Out",
            EasingMode::Custom => "Custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FrameRate,
    AnimationLength,
    FrameDuration,
    P1,
    P2,
}

#[derive(Debug, Clone)]
pub enum FormEvent {
    SetField(FormField, String),
    SelectPreset(EasingMode),
    Calculate,
}

/// Form state: raw text as typed plus the selected preset.
pub struct App {
    pub config: Config,
    pub frame_rate: String,
    pub animation_length: String,
    pub frame_duration: String,
    pub p1: String,
    pub p2: String,
    pub preset: EasingMode,
    pub custom_controls_visible: bool,

    // Outcome of the last Calculate
    pub report: Option<Report>,
    pub error: Option<InputError>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let text = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();
        Self {
            frame_rate: config.frame_rate.to_string(),
            animation_length: config.animation_length.to_string(),
            frame_duration: config.frame_duration.to_string(),
            p1: text(config.p1),
            p2: text(config.p2),
            preset: config.preset,
            custom_controls_visible: config.preset == EasingMode::Custom,
            report: None,
            error: None,
            config,
        }
    }

    pub fn handle_event(&mut self, event: FormEvent) {
        match event {
            FormEvent::SetField(field, text) => {
                let slot = match field {
                    FormField::FrameRate => &mut self.frame_rate,
                    FormField::AnimationLength => &mut self.animation_length,
                    FormField::FrameDuration => &mut self.frame_duration,
                    FormField::P1 => &mut self.p1,
                    FormField::P2 => &mut self.p2,
                };
                *slot = text;
            }
            FormEvent::SelectPreset(mode) => {
                self.preset = mode;
                self.custom_controls_visible = mode == EasingMode::Custom;
                debug!("Selected preset: {}", mode.label());
            }
            FormEvent::Calculate => match self.calculate() {
                Ok(report) => {
                    self.report = Some(report);
                    self.error = None;
                }
                Err(err) => {
                    self.report = None;
                    self.error = Some(err);
                }
            },
        }
    }

    /// Control points for the current form.
    ///
    /// Entered values are only used in Custom mode, each field on its own;
    /// an empty field or any named preset falls back to 0.25 / 0.75.
    // TODO: give Ease In / Ease Out / Ease In-Out their own control points once the curves are decided
    pub fn curve(&self) -> Result<EasingCurve, InputError> {
        let custom = self.preset == EasingMode::Custom;
        let pick = |field: &'static str, text: &str, fallback: f64| {
            if custom && !text.trim().is_empty() {
                validate::bezier_control_point(field, text)
            } else {
                Ok(fallback)
            }
        };
        Ok(EasingCurve::new(
            pick("P1", &self.p1, EasingCurve::DEFAULT_P1)?,
            pick("P2", &self.p2, EasingCurve::DEFAULT_P2)?,
        ))
    }

    pub fn request(&self) -> Result<CalculationRequest, InputError> {
        let frame_rate = validate::positive_float("Frame Rate", &self.frame_rate)?;
        let animation_length = validate::positive_float("Animation Length", &self.animation_length)?;
        let frames = frame_rate * animation_length;
        if !frames.is_finite() || frames > MAX_OBJECTS as f64 {
            return Err(InputError::Domain {
                field: "Frame Rate x Animation Length",
                value: frames,
                expected: "at most 1000000 objects",
            });
        }
        Ok(CalculationRequest {
            frame_rate,
            animation_length,
            frame_duration: validate::positive_float("Frame Duration", &self.frame_duration)?,
            curve: self.curve()?,
        })
    }

    pub fn calculate(&self) -> Result<Report, InputError> {
        let request = self.request().inspect_err(|err| warn!("Rejected input: {}", err))?;
        info!(
            "Calculating: {} fps, {}s long, {}s per object, {}",
            request.frame_rate,
            request.animation_length,
            request.frame_duration,
            self.preset.label()
        );
        Ok(Report::new(&request.run()))
    }

    /// Copies the current valid form into `config` so it can be saved.
    pub fn remember_defaults(&mut self) -> Result<(), InputError> {
        let request = self.request()?;
        self.config.frame_rate = request.frame_rate;
        self.config.animation_length = request.animation_length;
        self.config.frame_duration = request.frame_duration;
        self.config.preset = self.preset;
        if self.preset == EasingMode::Custom {
            let entered = |text: &str, value: f64| (!text.trim().is_empty()).then_some(value);
            self.config.p1 = entered(&self.p1, request.curve.p1);
            self.config.p2 = entered(&self.p2, request.curve.p2);
        }
        Ok(())
    }
}
