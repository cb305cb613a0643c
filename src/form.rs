/*!
 * Calculator forms.
 *
 * The three calculator tabs (area, volume, conditions) as plain data: text fields in,
 * messages out. This is the only place where unparsable input is replaced with a default;
 * the shape and condition modules only ever see resolved numbers.
 *
 */

use clap::Args;

use crate::shapes::{
    self,
    Dimension,
    DimensionSet,
    DimensionPolicy,
    ShapeError,
};
use crate::conditions::{
    self,
    AngleValue,
    AnglePair,
    Condition,
};

/// Value used for empty or unparsable fields.
pub const DEFAULT_FIELD_VALUE: f64 = 0.0;

/// Convert a text field to a number.
/// Blank or unparsable text gives `default`.
pub fn parse_field(text: &str, default: f64) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return default;
    }
    match text.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            log::debug!("Field \"{}\" is not a number, using {}", text, default);
            default
        },
    }
}

/// Severity of a message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
}

/// A result or warning notice, as shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub level: MessageLevel,
    pub title: String,
    pub body: String,
    /// Optional extra line explaining a warning.
    pub detail: Option<String>,
}
impl Message {
    pub fn info(title: &str, body: &str) -> Self {
        Message{level: MessageLevel::Info, title: title.to_string(), body: body.to_string(), detail: None}
    }

    pub fn warning(title: &str, body: &str) -> Self {
        Message{level: MessageLevel::Warning, title: title.to_string(), body: body.to_string(), detail: None}
    }

    pub fn with_detail(mut self, detail: String) -> Self {
        self.detail = Some(detail);
        self
    }
}
impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.level {
            MessageLevel::Info => write!(f, "{}: {}", self.title, self.body)?,
            MessageLevel::Warning => write!(f, "! {}: {}", self.title, self.body)?,
        }
        if let Some(detail) = &self.detail {
            write!(f, "\n{}", detail)?;
        }
        Ok(())
    }
}

/// Warning shown when a shape calculation fails.
pub fn shape_error_message(error: &ShapeError) -> Message {
    log::warn!("Shape calculation failed: {:?}", error);
    let body = if error.is_unsupported() {
        "Shape is not available"
    }
    else {
        "Dimension is not valid"
    };
    Message::warning("Invalid Input", body).with_detail(error.to_string())
}

/// Message for an area result, titled with the shape name as entered.
pub fn area_message(shape_name: &str, result: &shapes::ProcResult<f64>) -> Message {
    match result {
        Ok(area) => Message::info(&format!("Area {}", shape_name), &area.to_string()),
        Err(error) => shape_error_message(error),
    }
}

/// Message for a volume result, titled with the shape name as entered.
pub fn volume_message(shape_name: &str, result: &shapes::ProcResult<f64>) -> Message {
    match result {
        Ok(volume) => Message::info(&format!("Volume {}", shape_name), &volume.to_string()),
        Err(error) => shape_error_message(error),
    }
}

pub fn triplet_message(is_triplet: bool) -> Message {
    let prefix = if is_triplet { "This is" } else { "This is not" };
    Message::info("Check", &format!("{} a Pythagorean Triplet.", prefix))
}

/// One message per angle: complementary, then supplementary.
pub fn angle_messages(pair: &AnglePair) -> [Message; 2] {
    let message = |title: &str, value: AngleValue| match value {
        AngleValue::Defined(_) => Message::info(title, &value.to_string()),
        AngleValue::Undefined => Message::warning(title, &value.to_string()),
    };
    [
        message("Complementary Angle", pair.complementary),
        message("Supplementary Angle", pair.supplementary),
    ]
}

/// Area tab.
/// The first field is read as radius, side or length; the second as height, width or breadth.
#[derive(Debug, Clone, Default, Args)]
pub struct AreaForm {
    /// Selected shape (rectangle, square, triangle, circle).
    #[arg(short, long)]
    pub shape: String,

    /// Radius or side, in m.
    #[arg(short, long = "radius-or-side", default_value = "", allow_hyphen_values = true)]
    pub radius_or_side: String,

    /// Height or width, in m, if applicable.
    #[arg(long = "height-or-width", default_value = "", allow_hyphen_values = true)]
    pub height_or_width: String,

    /// Reject zero, negative and non-finite dimensions.
    #[arg(long)]
    pub strict: bool,
}
impl AreaForm {
    /// Resolve the text fields into a full dimension set.
    pub fn dimensions(&self) -> DimensionSet {
        let side = parse_field(&self.radius_or_side, DEFAULT_FIELD_VALUE);
        let height_or_width = parse_field(&self.height_or_width, DEFAULT_FIELD_VALUE);
        DimensionSet::new()
            .with(Dimension::Radius, side)
            .with(Dimension::Length, side)
            .with(Dimension::Breadth, height_or_width)
            .with(Dimension::Height, height_or_width)
    }

    pub fn submit(&self) -> Message {
        let result = shapes::compute_area_with_policy(&self.shape, &self.dimensions(), DimensionPolicy::from_strict_flag(self.strict));
        area_message(&self.shape, &result)
    }
}

/// Volume tab.
#[derive(Debug, Clone, Default, Args)]
pub struct VolumeForm {
    /// Selected shape (sphere, cube, cone, cuboid, cylinder).
    #[arg(short, long)]
    pub shape: String,

    /// Radius or side, in m.
    #[arg(short, long = "radius-or-side", default_value = "", allow_hyphen_values = true)]
    pub radius_or_side: String,

    /// Height, in m, if applicable.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub height: String,

    /// Breadth, in m, if applicable.
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub breadth: String,

    /// Reject zero, negative and non-finite dimensions.
    #[arg(long)]
    pub strict: bool,
}
impl VolumeForm {
    /// Resolve the text fields into a full dimension set.
    pub fn dimensions(&self) -> DimensionSet {
        let side = parse_field(&self.radius_or_side, DEFAULT_FIELD_VALUE);
        DimensionSet::new()
            .with(Dimension::Radius, side)
            .with(Dimension::Length, side)
            .with(Dimension::Breadth, parse_field(&self.breadth, DEFAULT_FIELD_VALUE))
            .with(Dimension::Height, parse_field(&self.height, DEFAULT_FIELD_VALUE))
    }

    pub fn submit(&self) -> Message {
        let result = shapes::compute_volume_with_policy(&self.shape, &self.dimensions(), DimensionPolicy::from_strict_flag(self.strict));
        volume_message(&self.shape, &result)
    }
}

/// Condition checker tab.
#[derive(Debug, Clone, Default, Args)]
pub struct ConditionForm {
    /// Selected condition (pythagorean-triplet, complementary-supplementary).
    #[arg(short, long)]
    pub condition: String,

    /// First number of the triplet.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub first: String,

    /// Second number of the triplet.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub second: String,

    /// Third number of the triplet (hypotenuse).
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub third: String,

    /// Angle in degrees.
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub angle: String,
}
impl ConditionForm {
    pub fn submit(&self) -> Vec<Message> {
        match Condition::from_name(&self.condition) {
            Some(Condition::PythagoreanTriplet) => {
                let a = parse_field(&self.first, DEFAULT_FIELD_VALUE);
                let b = parse_field(&self.second, DEFAULT_FIELD_VALUE);
                let c = parse_field(&self.third, DEFAULT_FIELD_VALUE);
                vec![triplet_message(conditions::is_pythagorean_triplet(a, b, c))]
            },
            Some(Condition::ComplementarySupplementary) => {
                let angle = parse_field(&self.angle, DEFAULT_FIELD_VALUE);
                angle_messages(&conditions::complementary_supplementary(angle)).to_vec()
            },
            None => {
                let message = Message::warning("Invalid Input", "No condition selected")
                    .with_detail(format!("- Available conditions: {}", Condition::available()));
                vec![message]
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn parse_field_falls_back() {
        assert_eq!(parse_field("abc", 0.0), 0.0);
        assert_eq!(parse_field("", 2.0), 2.0);
        assert_eq!(parse_field("   ", 1.5), 1.5);
        assert_eq!(parse_field(" 3.5 ", 0.0), 3.5);
        assert_eq!(parse_field("-4", 0.0), -4.0);
        assert_eq!(parse_field("1e3", 0.0), 1000.0);
    }

    #[test]
    fn area_form_square() {
        let form = AreaForm{shape: "Square".to_string(), radius_or_side: "4".to_string(), ..Default::default()};
        assert_eq!(form.submit(), Message::info("Area Square", "16"));
    }

    #[test]
    fn area_form_wires_second_field_to_breadth_and_height() {
        let form = AreaForm{
            shape: "triangle".to_string(),
            radius_or_side: "9".to_string(),
            height_or_width: "6".to_string(),
            strict: false,
        };
        let dims = form.dimensions();
        assert_eq!(dims.get(Dimension::Radius), Some(9.0));
        assert_eq!(dims.get(Dimension::Length), Some(9.0));
        assert_eq!(dims.get(Dimension::Breadth), Some(6.0));
        assert_eq!(dims.get(Dimension::Height), Some(6.0));
        assert_eq!(form.submit().body, "18");
    }

    #[test]
    fn unparsable_fields_become_zero() {
        let form = AreaForm{shape: "circle".to_string(), radius_or_side: "two".to_string(), ..Default::default()};
        assert_eq!(form.submit(), Message::info("Area circle", "0"));
    }

    #[test]
    fn unknown_shape_warns() {
        let form = AreaForm{shape: "Select".to_string(), radius_or_side: "1".to_string(), ..Default::default()};
        let message = form.submit();
        assert_eq!(message.level, MessageLevel::Warning);
        assert_eq!(message.title, "Invalid Input");
        assert_eq!(message.body, "Shape is not available");
        assert!(message.detail.unwrap().contains("Select"));
    }

    #[test]
    fn strict_form_rejects_empty_field() {
        let form = AreaForm{shape: "circle".to_string(), strict: true, ..Default::default()};
        let message = form.submit();
        assert_eq!(message.level, MessageLevel::Warning);
        assert_eq!(message.body, "Dimension is not valid");
    }

    #[test]
    fn volume_form_cylinder() {
        let form = VolumeForm{
            shape: "Cylinder".to_string(),
            radius_or_side: "1".to_string(),
            height: "2".to_string(),
            ..Default::default()
        };
        assert_eq!(form.submit(), Message::info("Volume Cylinder", &(PI * 2.0).to_string()));
    }

    #[test]
    fn volume_form_cuboid_uses_breadth() {
        let form = VolumeForm{
            shape: "cuboid".to_string(),
            radius_or_side: "2".to_string(),
            height: "3".to_string(),
            breadth: "4".to_string(),
            strict: false,
        };
        assert_eq!(form.submit().body, "24");
    }

    #[test]
    fn condition_form_triplet() {
        let form = ConditionForm{
            condition: "Pythagorean Triplet Checker".to_string(),
            first: "3".to_string(),
            second: "4".to_string(),
            third: "5".to_string(),
            ..Default::default()
        };
        assert_eq!(form.submit(), vec![Message::info("Check", "This is a Pythagorean Triplet.")]);

        let form = ConditionForm{third: "6".to_string(), ..form};
        assert_eq!(form.submit(), vec![Message::info("Check", "This is not a Pythagorean Triplet.")]);
    }

    #[test]
    fn condition_form_angles() {
        let form = ConditionForm{condition: "angle".to_string(), angle: "120".to_string(), ..Default::default()};
        assert_eq!(form.submit(), vec![
            Message::warning("Complementary Angle", "not defined"),
            Message::info("Supplementary Angle", "60"),
        ]);
    }

    #[test]
    fn condition_form_without_selection() {
        let messages = ConditionForm{condition: "Select".to_string(), ..Default::default()}.submit();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].body, "No condition selected");
    }

    #[test]
    fn message_display() {
        assert_eq!(Message::info("Area Square", "16").to_string(), "Area Square: 16");
        let warning = Message::warning("Invalid Input", "Shape is not available").with_detail("- why".to_string());
        assert_eq!(warning.to_string(), "! Invalid Input: Shape is not available\n- why");
    }
}
