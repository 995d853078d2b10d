// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Parsing of comma-separated coordinate arguments

use crate::geometry::Point;
use anyhow::{bail, Context, Result};

fn parse_components<const N: usize>(input: &str) -> Result<[f64; N]> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() != N {
        bail!("Expected {} comma-separated numbers, got {:?}", N, input);
    }

    let mut values = [0.0; N];
    for (value, part) in values.iter_mut().zip(&parts) {
        *value = part
            .parse()
            .with_context(|| format!("Invalid coordinate {:?} in {:?}", part, input))?;
    }
    Ok(values)
}

/// Parse `X,Y,Z` into a point
pub fn parse_point(input: &str) -> Result<Point> {
    parse_components::<3>(input).map(Point::from)
}

/// Parse `X,Y` into a coordinate pair
pub fn parse_xy(input: &str) -> Result<(f64, f64)> {
    let [x, y] = parse_components::<2>(input)?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("1, -2.5,3").unwrap(), Point::new(1.0, -2.5, 3.0));
        assert!(parse_point("1,2").is_err());
        assert!(parse_point("1,2,3,4").is_err());
    }

    #[test]
    fn test_parse_error_names_token() {
        let err = parse_point("1,abc,3").unwrap_err();
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_parse_xy() {
        assert_eq!(parse_xy("5,0").unwrap(), (5.0, 0.0));
        assert!(parse_xy("5").is_err());
    }
}
