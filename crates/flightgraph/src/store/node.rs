//! Airport node records.

use serde::{Deserialize, Serialize};

/// An airport in the route network.
///
/// The `id` is the stable external key used by edge data to reference the
/// airport; the analytics engine resolves ids to dense indices at graph
/// construction and treats everything else as opaque payload (the one
/// exception is `country`, which the regional-connectivity metric reads).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    /// Stable external identifier.
    pub id: u32,
    /// Airport name.
    pub name: String,
    /// City served.
    pub city: String,
    /// Country.
    pub country: String,
    /// IATA code, empty if unassigned.
    pub iata: String,
    /// ICAO code, empty if unassigned.
    pub icao: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Field elevation in feet.
    pub altitude: i32,
}

impl Airport {
    /// Create an airport with the given id and name; remaining fields empty.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            city: String::new(),
            country: String::new(),
            iata: String::new(),
            icao: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            altitude: 0,
        }
    }

    /// Set the city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Set the country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Set the IATA code.
    pub fn with_iata(mut self, iata: impl Into<String>) -> Self {
        self.iata = iata.into();
        self
    }

    /// Set the ICAO code.
    pub fn with_icao(mut self, icao: impl Into<String>) -> Self {
        self.icao = icao.into();
        self
    }

    /// Set the coordinates.
    pub const fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Set the field elevation.
    pub const fn with_altitude(mut self, altitude: i32) -> Self {
        self.altitude = altitude;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let airport = Airport::new(507, "Heathrow")
            .with_city("London")
            .with_country("United Kingdom")
            .with_iata("LHR")
            .with_icao("EGLL")
            .with_coordinates(51.4706, -0.461941)
            .with_altitude(83);

        assert_eq!(airport.id, 507);
        assert_eq!(airport.name, "Heathrow");
        assert_eq!(airport.city, "London");
        assert_eq!(airport.iata, "LHR");
        assert_eq!(airport.icao, "EGLL");
        assert!((airport.latitude - 51.4706).abs() < f64::EPSILON);
        assert_eq!(airport.altitude, 83);
    }
}
