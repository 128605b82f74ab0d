use serde::Serialize;

use crate::model::{BoatRecord, GeoCoordinate};

pub const LABEL_YOU_ARE_HERE: &str = "You are here!";
pub const ICON_STANDARD_USER: &str = "standard:user";

/// A map pin derived from the viewer position or a boat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub location: GeoCoordinate,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Viewer marker first, then one marker per boat that has a position.
pub fn create_map_markers(viewer: GeoCoordinate, boats: &[BoatRecord]) -> Vec<MapMarker> {
    let viewer_marker = MapMarker {
        location: viewer,
        title: LABEL_YOU_ARE_HERE.to_string(),
        icon: Some(ICON_STANDARD_USER.to_string()),
    };

    std::iter::once(viewer_marker)
        .chain(boats.iter().filter_map(|boat| {
            boat.coordinate().map(|location| MapMarker {
                location,
                title: boat.name.clone(),
                icon: None,
            })
        }))
        .collect()
}

/// Decode a location-query payload.
///
/// A `null` payload is an empty list. Entries that do not decode as a boat
/// are skipped so one bad row does not blank the whole map.
pub fn parse_nearby_boats(payload: &str) -> Result<Vec<BoatRecord>, serde_json::Error> {
    let entries: Option<Vec<serde_json::Value>> = serde_json::from_str(payload)?;
    let boats = entries
        .unwrap_or_default()
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<BoatRecord>(entry) {
            Ok(boat) => Some(boat),
            Err(err) => {
                tracing::warn!(error = %err, "Skipping malformed nearby boat");
                None
            }
        })
        .collect();
    Ok(boats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_first_and_unlocated_boats_dropped() {
        let boats = parse_nearby_boats(
            r#"[{"id":"a","name":"A","latitude":11,"longitude":21},
                {"id":"b","name":"B","latitude":null,"longitude":null}]"#,
        )
        .unwrap();
        let markers = create_map_markers(GeoCoordinate::new(10.0, 20.0), &boats);

        assert_eq!(
            markers,
            vec![
                MapMarker {
                    location: GeoCoordinate::new(10.0, 20.0),
                    title: "You are here!".into(),
                    icon: Some("standard:user".into()),
                },
                MapMarker {
                    location: GeoCoordinate::new(11.0, 21.0),
                    title: "A".into(),
                    icon: None,
                },
            ]
        );
    }

    #[test]
    fn no_boats_still_yields_viewer_marker() {
        let markers = create_map_markers(GeoCoordinate::new(1.0, 2.0), &[]);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].title, LABEL_YOU_ARE_HERE);
    }

    #[test]
    fn null_payload_is_empty() {
        assert!(parse_nearby_boats("null").unwrap().is_empty());
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let boats = parse_nearby_boats(
            r#"[{"name":"no id"},{"id":"ok","name":"Ok","latitude":1,"longitude":2}]"#,
        )
        .unwrap();
        assert_eq!(boats.len(), 1);
        assert_eq!(boats[0].name, "Ok");
    }

    #[test]
    fn non_json_payload_is_an_error() {
        assert!(parse_nearby_boats("<html>").is_err());
    }
}
