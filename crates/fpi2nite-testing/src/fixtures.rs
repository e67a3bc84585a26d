//! VOEvent packet builders.
//!
//! The generated XML follows the layout of real archive packets: a namespaced
//! root, `What` parameters and groups, the `WhereWhen` observation location and an
//! optional `Why/Inference/Name`.

use std::fmt::Write;

/// Incremental builder for one VOEvent packet.
#[derive(Debug, Clone)]
pub struct PacketBuilder {
    ivorn: String,
    role: String,
    params: Vec<(String, String)>,
    groups: Vec<Vec<(String, String)>>,
    inference_name: Option<String>,
    isot: Option<String>,
    ra: Option<String>,
    dec: Option<String>,
}

impl PacketBuilder {
    pub fn new(ivorn: impl Into<String>) -> Self {
        Self {
            ivorn: ivorn.into(),
            role: "observation".to_string(),
            params: Vec::new(),
            groups: Vec::new(),
            inference_name: None,
            isot: None,
            ra: None,
            dec: None,
        }
    }

    pub fn role(mut self, role: &str) -> Self {
        self.role = role.to_string();
        self
    }

    /// Add a `What/Param`.
    pub fn param(mut self, name: &str, value: &str) -> Self {
        self.params.push((name.to_string(), value.to_string()));
        self
    }

    /// Add a `What/Group` holding the given params in order.
    pub fn group(mut self, params: &[(&str, &str)]) -> Self {
        self.groups.push(
            params
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
        );
        self
    }

    pub fn inference_name(mut self, name: &str) -> Self {
        self.inference_name = Some(name.to_string());
        self
    }

    /// Set observation instant and position.
    pub fn observed(mut self, isot: &str, ra: &str, dec: &str) -> Self {
        self.isot = Some(isot.to_string());
        self.ra = Some(ra.to_string());
        self.dec = Some(dec.to_string());
        self
    }

    pub fn without_isot(mut self) -> Self {
        self.isot = None;
        self
    }

    pub fn without_position(mut self) -> Self {
        self.ra = None;
        self.dec = None;
        self
    }

    pub fn build(&self) -> String {
        let mut xml = String::new();
        let _ = writeln!(xml, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        let _ = writeln!(
            xml,
            r#"<voe:VOEvent xmlns:voe="http://www.ivoa.net/xml/VOEvent/v2.0" ivorn="{}" role="{}" version="2.0">"#,
            self.ivorn, self.role
        );

        xml.push_str("  <What>\n");
        for (name, value) in &self.params {
            let _ = writeln!(xml, r#"    <Param name="{}" value="{}" />"#, name, value);
        }
        for group in &self.groups {
            xml.push_str("    <Group>\n");
            for (name, value) in group {
                let _ = writeln!(xml, r#"      <Param name="{}" value="{}" />"#, name, value);
            }
            xml.push_str("    </Group>\n");
        }
        xml.push_str("  </What>\n");

        xml.push_str("  <WhereWhen>\n    <ObsDataLocation>\n      <ObservationLocation>\n");
        xml.push_str("        <AstroCoords coord_system_id=\"UTC-FK5-GEO\">\n");
        if let Some(isot) = &self.isot {
            let _ = writeln!(
                xml,
                "          <Time unit=\"s\"><TimeInstant><ISOTime>{}</ISOTime></TimeInstant></Time>",
                isot
            );
        }
        if self.ra.is_some() || self.dec.is_some() {
            xml.push_str("          <Position2D unit=\"deg\">\n            <Value2>\n");
            if let Some(ra) = &self.ra {
                let _ = writeln!(xml, "              <C1>{}</C1>", ra);
            }
            if let Some(dec) = &self.dec {
                let _ = writeln!(xml, "              <C2>{}</C2>", dec);
            }
            xml.push_str("            </Value2>\n          </Position2D>\n");
        }
        xml.push_str("        </AstroCoords>\n");
        xml.push_str("      </ObservationLocation>\n    </ObsDataLocation>\n  </WhereWhen>\n");

        if let Some(name) = &self.inference_name {
            let _ = writeln!(
                xml,
                "  <Why importance=\"0.5\"><Inference probability=\"1.0\"><Name>{}</Name></Inference></Why>",
                name
            );
        }

        xml.push_str("</voe:VOEvent>\n");
        xml
    }
}

/// Swift-BAT GRB position notice.
pub fn swift_packet(ivorn: &str, name: &str, isot: &str, ra: &str, dec: &str) -> String {
    PacketBuilder::new(ivorn)
        .param("Packet_Type", "61")
        .param("TrigID", "1060430")
        .inference_name(name)
        .observed(isot, ra, dec)
        .build()
}

/// Fermi-GBM final position notice.
pub fn fermi_packet(ivorn: &str, trig_id: &str, isot: &str, ra: &str, dec: &str) -> String {
    PacketBuilder::new(ivorn)
        .param("Packet_Type", "115")
        .param("TrigID", trig_id)
        .group(&[("Trigger_ID", "0x0")])
        .observed(isot, ra, dec)
        .build()
}

/// ASAS-SN alert carrying the given `What/Group/Param` pairs.
pub fn asassn_packet(ivorn: &str, params: &[(&str, &str)], isot: &str, ra: &str, dec: &str) -> String {
    PacketBuilder::new(ivorn)
        .group(params)
        .observed(isot, ra, dec)
        .build()
}
