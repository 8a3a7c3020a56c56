//! 시나리오 파일(TOML/JSON)에서 계산기 입력을 읽는다.
//!
//! 파일에 없는 필드는 기본 입력 값으로 채운다. 키 이름은 공유 링크 키가 아니라
//! 필드 이름(camelCase)을 그대로 쓴다.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::input::CalculatorInput;

#[derive(Debug, Error)]
pub enum InputFileError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML 파싱 오류: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON 파싱 오류: {0}")]
    Json(#[from] serde_json::Error),
    #[error("지원하지 않는 파일 형식: {0} (toml 또는 json)")]
    UnsupportedExtension(String),
}

/// 확장자(.toml / .json)에 따라 입력 파일을 읽는다.
pub fn load_input(path: &Path) -> Result<CalculatorInput, InputFileError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();
    let content = fs::read_to_string(path)?;
    let input = match ext.as_str() {
        "toml" => toml::from_str(&content)?,
        "json" => serde_json::from_str(&content)?,
        _ => return Err(InputFileError::UnsupportedExtension(path.display().to_string())),
    };
    debug!(path = %path.display(), "입력 파일 로드");
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::RentalType;
    use crate::presets::DEFAULT_INPUT;

    #[test]
    fn toml_sections_map_to_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.toml");
        fs::write(
            &path,
            r#"
rentalType = "shortTerm"

[revenue]
ratePerUnit = 390000
expectedOccupancyPerMonth = 4

[operatingCosts]
monthlyRent = 700000
"#,
        )
        .unwrap();
        let input = load_input(&path).unwrap();
        assert_eq!(input.rental_type, RentalType::ShortTerm);
        assert_eq!(input.revenue.rate_per_unit, 390_000.0);
        assert_eq!(input.operating_costs.monthly_rent, 700_000.0);
        assert_eq!(input.investment, DEFAULT_INPUT.investment);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.yaml");
        fs::write(&path, "rentalType: airbnb").unwrap();
        assert!(matches!(
            load_input(&path),
            Err(InputFileError::UnsupportedExtension(_))
        ));
    }
}
