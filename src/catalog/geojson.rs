use serde::{Deserialize, Deserializer};

use crate::spectrum::{Rgb, star_color};

/// A position as `[longitude, latitude]` in degrees.
///
/// On the celestial sphere the longitude is the right ascension, wrapped to
/// [-180, 180].
pub type Position = Vec<f64>;

#[derive(Clone, Debug, Deserialize)]
pub struct FeatureCollection<P> {
    pub features: Vec<Feature<P>>,
}

impl<P> FeatureCollection<P> {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Feature<P> {
    #[serde(default)]
    pub id: Option<FeatureId>,
    pub geometry: Geometry,
    pub properties: P,
}

/// Feature identifier: a catalog number or a constellation abbreviation.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Deserialize)]
#[serde(untagged)]
pub enum FeatureId {
    Number(i64),
    Name(String),
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point(Position),
    MultiPoint(Vec<Position>),
    LineString(Vec<Position>),
    MultiLineString(Vec<Vec<Position>>),
    Polygon(Vec<Vec<Position>>),
    MultiPolygon(Vec<Vec<Vec<Position>>>),
}

impl Geometry {
    /// Returns the number of positions in the geometry.
    pub fn position_count(&self) -> usize {
        match self {
            Geometry::Point(_) => 1,
            Geometry::MultiPoint(points) | Geometry::LineString(points) => points.len(),
            Geometry::MultiLineString(lines) | Geometry::Polygon(lines) => {
                lines.iter().map(Vec::len).sum()
            }
            Geometry::MultiPolygon(polygons) => polygons.iter().flatten().map(Vec::len).sum(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct StarProperties {
    /// Apparent visual magnitude.
    pub mag: f64,
    /// B-V color index.
    #[serde(default, deserialize_with = "lenient_number")]
    pub bv: Option<f64>,
    #[serde(default)]
    pub name: Option<String>,
}

impl StarProperties {
    /// Returns the display color, if the color index is known.
    pub fn color(&self) -> Option<Rgb> {
        self.bv.map(star_color)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ConstellationProperties {
    #[serde(default)]
    pub name: Option<String>,
}

/// Accepts a number, a numeric string, an empty string or null.
fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(value)) => Some(value),
        Some(Raw::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_star_feature() {
        let json = r#"{
            "type": "Feature",
            "id": 32349,
            "properties": {"name": "Sirius", "mag": -1.44, "bv": "0.009"},
            "geometry": {"type": "Point", "coordinates": [101.2885, -16.7131]}
        }"#;
        let feature: Feature<StarProperties> = serde_json::from_str(json).unwrap();
        assert_eq!(feature.id, Some(FeatureId::Number(32349)));
        assert_eq!(feature.properties.name.as_deref(), Some("Sirius"));
        assert_eq!(feature.properties.bv, Some(0.009));
        assert_eq!(
            feature.geometry,
            Geometry::Point(vec![101.2885, -16.7131])
        );
    }

    #[test]
    fn color_index_variants() {
        for (bv, expected) in [
            ("1.5", Some(1.5)),
            ("\"1.5\"", Some(1.5)),
            ("\"\"", None),
            ("null", None),
        ] {
            let json = format!(r#"{{"mag": 3.0, "bv": {bv}}}"#);
            let properties: StarProperties = serde_json::from_str(&json).unwrap();
            assert_eq!(properties.bv, expected, "bv = {bv}");
        }
        let properties: StarProperties = serde_json::from_str(r#"{"mag": 3.0}"#).unwrap();
        assert_eq!(properties.bv, None);
        assert_eq!(properties.color(), None);
    }

    #[test]
    fn parses_constellation_lines() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "id": "Ori",
                "properties": {"name": "Orion"},
                "geometry": {
                    "type": "MultiLineString",
                    "coordinates": [[[88.79, 7.41], [81.28, 6.35]], [[83.0, -0.3], [84.05, -1.2], [85.19, -1.94]]]
                }
            }]
        }"#;
        let collection: FeatureCollection<ConstellationProperties> =
            serde_json::from_str(json).unwrap();
        assert_eq!(collection.len(), 1);
        let feature = &collection.features[0];
        assert_eq!(feature.id, Some(FeatureId::Name("Ori".into())));
        assert_eq!(feature.geometry.position_count(), 5);
    }

    #[test]
    fn rejects_unknown_geometry() {
        let json = r#"{"type": "Circle", "coordinates": [0.0, 0.0]}"#;
        assert!(serde_json::from_str::<Geometry>(json).is_err());
    }
}
