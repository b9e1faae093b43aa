//! compare CLI subcommand

use crate::models::NotesConfig;
use crate::{Context, Result};
use std::cmp::Ordering;

/// Compare two versions, rendering e.g. `1.33.0-gke.1 < 1.34.0-gke.1`
pub fn render(a: &str, b: &str, config: &NotesConfig) -> Result<String> {
    let scheme = config.scheme();
    let left = scheme
        .parse(a)
        .with_context(|| format!("Cannot compare {}", a))?;
    let right = scheme
        .parse(b)
        .with_context(|| format!("Cannot compare {}", b))?;

    let symbol = match left.compare(&right) {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    Ok(format!("{} {} {}", a, symbol, b))
}

pub fn run(a: &str, b: &str, config: &NotesConfig) -> Result<()> {
    println!("{}", render(a, b, config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_ordering() {
        let config = NotesConfig::default();
        assert_eq!(
            render("1.33.0-gke.1", "1.34.0-gke.1", &config).unwrap(),
            "1.33.0-gke.1 < 1.34.0-gke.1"
        );
        assert_eq!(
            render("1.34.0-gke.01", "1.34.0-gke.1", &config).unwrap(),
            "1.34.0-gke.01 = 1.34.0-gke.1"
        );
        assert_eq!(
            render("1.34.1-gke.1431000", "1.34.1-gke.1431", &config).unwrap(),
            "1.34.1-gke.1431000 > 1.34.1-gke.1431"
        );
    }

    #[test]
    fn test_render_rejects_malformed() {
        let err = render("1.34", "1.34.0-gke.1", &NotesConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Cannot compare 1.34"));
    }
}
