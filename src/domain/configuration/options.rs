use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// How gateway and monolith services are exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ServiceType {
    #[serde(rename = "ClusterIP")]
    ClusterIp,
    NodePort,
    #[default]
    LoadBalancer,
    Ingress,
}

impl ServiceType {
    pub const ALL: [ServiceType; 4] =
        [ServiceType::ClusterIp, ServiceType::NodePort, ServiceType::LoadBalancer, ServiceType::Ingress];

    /// Name as used in Kubernetes manifests.
    pub fn label(self) -> &'static str {
        match self {
            ServiceType::ClusterIp => "ClusterIP",
            ServiceType::NodePort => "NodePort",
            ServiceType::LoadBalancer => "LoadBalancer",
            ServiceType::Ingress => "Ingress",
        }
    }

    /// Service `spec.type` for exposed applications. Ingress sits in front of a ClusterIP service.
    pub fn service_spec_type(self) -> &'static str {
        match self {
            ServiceType::Ingress => "ClusterIP",
            other => other.label(),
        }
    }

    pub fn from_name(name: &str) -> Result<Self, AppError> {
        Self::ALL.into_iter().find(|t| t.label().eq_ignore_ascii_case(name)).ok_or_else(|| {
            AppError::UnknownValue {
                what: "service type",
                value: name.to_string(),
                expected: Self::ALL.map(|t| t.label()).join(", "),
            }
        })
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Service-discovery backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceDiscovery {
    #[default]
    Eureka,
    Consul,
    None,
}

impl ServiceDiscovery {
    pub const ALL: [ServiceDiscovery; 3] =
        [ServiceDiscovery::Eureka, ServiceDiscovery::Consul, ServiceDiscovery::None];

    pub fn label(self) -> &'static str {
        match self {
            ServiceDiscovery::Eureka => "eureka",
            ServiceDiscovery::Consul => "consul",
            ServiceDiscovery::None => "none",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, AppError> {
        let normalized = name.to_lowercase();
        if normalized == "no" || normalized == "false" {
            return Ok(ServiceDiscovery::None);
        }
        Self::ALL.into_iter().find(|d| d.label() == normalized).ok_or_else(|| {
            AppError::UnknownValue {
                what: "service discovery",
                value: name.to_string(),
                expected: Self::ALL.map(|d| d.label()).join(", "),
            }
        })
    }
}

impl fmt::Display for ServiceDiscovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Monitoring integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Monitoring {
    #[default]
    None,
    Prometheus,
}

impl Monitoring {
    pub const ALL: [Monitoring; 2] = [Monitoring::None, Monitoring::Prometheus];

    pub fn label(self) -> &'static str {
        match self {
            Monitoring::None => "none",
            Monitoring::Prometheus => "prometheus",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, AppError> {
        let normalized = name.to_lowercase();
        if normalized == "no" {
            return Ok(Monitoring::None);
        }
        Self::ALL.into_iter().find(|m| m.label() == normalized).ok_or_else(|| {
            AppError::UnknownValue {
                what: "monitoring",
                value: name.to_string(),
                expected: Self::ALL.map(|m| m.label()).join(", "),
            }
        })
    }
}
