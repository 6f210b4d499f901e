//! Field-level parsing rules for raw task payloads.
//!
//! Each rule inspects one field of an untyped JSON object and either yields
//! a typed value or appends a violation. Rules never short-circuit; the
//! caller reports every violation at once.

use super::error::{ValidationError, ValidationResult};
use crate::task::{
    domain::{TaskPatch, TaskTitle},
    services::CreateTaskRequest,
};
use serde_json::{Map, Value};

/// Parses a raw create payload into a typed request.
///
/// `title` is required and must be a string of 1–200 characters;
/// `description` is optional and may be a string or null.
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every violated constraint.
pub fn parse_create(payload: &Value) -> ValidationResult<CreateTaskRequest> {
    let object = as_object(payload)?;
    let mut violations = Vec::new();

    let parsed_title = parse_title(object, true, &mut violations);
    let description = parse_description(object, &mut violations);

    let Some(title) = parsed_title else {
        return Err(ValidationError::multiple(violations));
    };
    if !violations.is_empty() {
        return Err(ValidationError::multiple(violations));
    }

    let mut request = CreateTaskRequest::new(title);
    if let Some(Some(description)) = description {
        request = request.with_description(description);
    }
    Ok(request)
}

/// Parses a raw update payload into a partial patch.
///
/// Every field is optional. When present, `title` must be a non-null string
/// of 1–200 characters and `completed` must be a boolean. `description` may
/// be a string or an explicit null (which clears the field); fields absent
/// from the payload are treated as "not provided".
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every violated constraint.
pub fn parse_patch(payload: &Value) -> ValidationResult<TaskPatch> {
    let object = as_object(payload)?;
    let mut violations = Vec::new();

    let title = parse_title(object, false, &mut violations);
    let description = parse_description(object, &mut violations);
    let completed = parse_completed(object, &mut violations);

    if violations.is_empty() {
        Ok(TaskPatch {
            title,
            description,
            completed,
        })
    } else {
        Err(ValidationError::multiple(violations))
    }
}

fn as_object(payload: &Value) -> ValidationResult<&Map<String, Value>> {
    payload.as_object().ok_or(ValidationError::NotAnObject)
}

/// Parses `title`. A missing field is a violation only on create; an
/// explicit null is always rejected since the column is non-nullable.
fn parse_title(
    object: &Map<String, Value>,
    required: bool,
    violations: &mut Vec<ValidationError>,
) -> Option<TaskTitle> {
    match object.get("title") {
        None => {
            if required {
                violations.push(ValidationError::MissingTitle);
            }
            None
        }
        Some(Value::String(raw)) => match TaskTitle::new(raw.clone()) {
            Ok(title) => Some(title),
            Err(err) => {
                violations.push(ValidationError::InvalidTitle(err));
                None
            }
        },
        Some(_) => {
            violations.push(ValidationError::WrongType {
                field: "title",
                expected: "string",
            });
            None
        }
    }
}

fn parse_description(
    object: &Map<String, Value>,
    violations: &mut Vec<ValidationError>,
) -> Option<Option<String>> {
    match object.get("description") {
        None => None,
        Some(Value::Null) => Some(None),
        Some(Value::String(raw)) => Some(Some(raw.clone())),
        Some(_) => {
            violations.push(ValidationError::WrongType {
                field: "description",
                expected: "string or null",
            });
            None
        }
    }
}

fn parse_completed(
    object: &Map<String, Value>,
    violations: &mut Vec<ValidationError>,
) -> Option<bool> {
    match object.get("completed") {
        None => None,
        Some(Value::Bool(flag)) => Some(*flag),
        Some(_) => {
            violations.push(ValidationError::WrongType {
                field: "completed",
                expected: "boolean",
            });
            None
        }
    }
}
