//! HTTP implementations of the Celestial Mirror boundary traits.

pub mod gemini;
pub mod geolocation;

#[cfg(test)]
mod test_server;
