//! Controller outcome codes.

/// The outcome of a controller operation, one step removed from the wire:
/// each variant corresponds to exactly one HTTP status, but carries typed
/// payloads instead of serialized bodies.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    /// 200 with a payload.
    Ok(T),
    /// 201 with the stored representation of the new resource.
    Created(T),
    /// 204, mutation applied.
    NoContent,
    /// 404, no record for the requested id.
    NotFound,
    /// 400, caller-supplied data failed validation.
    BadRequest(String),
    /// 409, the id is already taken.
    Conflict(String),
}

impl<T> ApiResponse<T> {
    /// The HTTP status code this outcome maps to.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiResponse::Ok(_) => 200,
            ApiResponse::Created(_) => 201,
            ApiResponse::NoContent => 204,
            ApiResponse::NotFound => 404,
            ApiResponse::BadRequest(_) => 400,
            ApiResponse::Conflict(_) => 409,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_map_to_expected_status_codes() {
        assert_eq!(ApiResponse::Ok(()).status_code(), 200);
        assert_eq!(ApiResponse::Created(()).status_code(), 201);
        assert_eq!(ApiResponse::<()>::NoContent.status_code(), 204);
        assert_eq!(ApiResponse::<()>::NotFound.status_code(), 404);
        assert_eq!(
            ApiResponse::<()>::BadRequest("name is required".into()).status_code(),
            400
        );
        assert_eq!(ApiResponse::<()>::Conflict("1".into()).status_code(), 409);
    }
}
