//! Renders Kubernetes manifests and the driver script for a deployment plan.

use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, UndefinedBehavior, context};
use serde::Serialize;

use crate::domain::{
    AppError, ApplicationDescriptor, DRIVER_SCRIPT, DatabaseType, DeploymentPlan, Monitoring,
    ServiceDiscovery, ServiceType,
};
use crate::ports::ManifestFile;

static KUBERNETES_TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/kubernetes");

const SHARED_DIR: &str = "shared";
const REGISTRY_DIR: &str = "registry";
const MESSAGE_BROKER_DIR: &str = "messagebroker";

#[derive(Debug, Serialize)]
struct EnvVar {
    name: String,
    value: String,
}

impl EnvVar {
    fn new(name: &str, value: impl Into<String>) -> Self {
        Self { name: name.to_string(), value: value.into() }
    }
}

#[derive(Debug, Serialize)]
struct DatabaseView {
    name: String,
    kind: &'static str,
    image: &'static str,
    port: u16,
    replicas: u8,
    env: Vec<EnvVar>,
}

#[derive(Debug, Serialize)]
struct AppView {
    name: String,
    base_name: String,
    application_type: &'static str,
    image: String,
    port: u16,
    service_type: &'static str,
    uses_secret: bool,
    env: Vec<EnvVar>,
    database: Option<DatabaseView>,
}

/// Embedded template set for Kubernetes output.
pub struct ManifestRenderer {
    env: Environment<'static>,
}

impl ManifestRenderer {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);

        for file in KUBERNETES_TEMPLATES_DIR.files() {
            let name = file.path().to_str().ok_or_else(|| {
                AppError::config_error(format!(
                    "Template path is not UTF-8: {}",
                    file.path().display()
                ))
            })?;
            let source = file.contents_utf8().ok_or_else(|| {
                AppError::config_error(format!("Template is not UTF-8: {}", name))
            })?;
            env.add_template(name, source).map_err(|err| AppError::Template {
                template: name.to_string(),
                details: err.to_string(),
            })?;
        }

        Ok(Self { env })
    }

    /// Every file for the plan; the driver script comes last.
    pub fn render(&self, plan: &DeploymentPlan) -> Result<Vec<ManifestFile>, AppError> {
        let config = plan.config();
        let namespace = plan.namespace();
        let prometheus = config.monitoring == Monitoring::Prometheus;
        let ingress = config.service_type == ServiceType::Ingress && !config.istio;
        let domain = config.ingress_domain.clone().unwrap_or_default();

        let mut files = Vec::new();
        let mut apply_dirs = Vec::new();

        files.push(self.file(
            "namespace.yml".to_string(),
            "namespace.yml.j2",
            context! { namespace, istio => config.istio },
        )?);

        if plan.needs_shared_secret()
            && let Some(secret) = config.jwt_secret.as_ref()
        {
            files.push(self.file(
                format!("{}/jwt-secret.yml", SHARED_DIR),
                "jwt-secret.yml.j2",
                context! { namespace, secret => secret.expose() },
            )?);
            apply_dirs.push(SHARED_DIR.to_string());
        }

        let registry = match plan.service_discovery() {
            ServiceDiscovery::Eureka => Some(("jhipster-registry.yml", "jhipster-registry.yml.j2")),
            ServiceDiscovery::Consul => Some(("consul.yml", "consul.yml.j2")),
            ServiceDiscovery::None => None,
        };
        if let Some((file_name, template)) = registry {
            files.push(self.file(
                format!("{}/{}", REGISTRY_DIR, file_name),
                template,
                context! { namespace, uses_secret => config.jwt_secret.is_some() },
            )?);
            apply_dirs.push(REGISTRY_DIR.to_string());
        }

        if plan.uses_kafka() {
            files.push(self.file(
                format!("{}/kafka.yml", MESSAGE_BROKER_DIR),
                "kafka.yml.j2",
                context! { namespace },
            )?);
            apply_dirs.push(MESSAGE_BROKER_DIR.to_string());
        }

        for app in plan.applications() {
            let view = app_view(plan, app);
            let dir = format!("{}-k8s", view.name);
            let exposed = app.application_type.is_exposed();
            let ctx = context! {
                namespace,
                app => &view,
                prometheus,
                domain => &domain,
            };

            files.push(self.file(
                format!("{}/{}-deployment.yml", dir, view.name),
                "deployment.yml.j2",
                ctx.clone(),
            )?);
            files.push(self.file(
                format!("{}/{}-service.yml", dir, view.name),
                "service.yml.j2",
                ctx.clone(),
            )?);
            if let Some(database) = &view.database {
                files.push(self.file(
                    format!("{}/{}.yml", dir, database.name),
                    "database.yml.j2",
                    ctx.clone(),
                )?);
            }
            if exposed && ingress {
                files.push(self.file(
                    format!("{}/{}-ingress.yml", dir, view.name),
                    "ingress.yml.j2",
                    ctx.clone(),
                )?);
            }
            if config.istio_route {
                if exposed {
                    files.push(self.file(
                        format!("{}/{}-gateway.yml", dir, view.name),
                        "istio-gateway.yml.j2",
                        ctx.clone(),
                    )?);
                }
                files.push(self.file(
                    format!("{}/{}-virtual-service.yml", dir, view.name),
                    "virtual-service.yml.j2",
                    ctx.clone(),
                )?);
                files.push(self.file(
                    format!("{}/{}-destination-rule.yml", dir, view.name),
                    "destination-rule.yml.j2",
                    ctx,
                )?);
            }
            apply_dirs.push(dir);
        }

        files.push(self.file(
            DRIVER_SCRIPT.to_string(),
            "kubectl-apply.sh.j2",
            context! { namespace, apply_dirs },
        )?);

        tracing::debug!(files = files.len(), "rendered manifests");
        Ok(files)
    }

    fn file(
        &self,
        path: String,
        template: &str,
        ctx: minijinja::Value,
    ) -> Result<ManifestFile, AppError> {
        let to_error = |err: minijinja::Error| AppError::Template {
            template: template.to_string(),
            details: err.to_string(),
        };
        let content =
            self.env.get_template(template).map_err(to_error)?.render(ctx).map_err(to_error)?;
        Ok(ManifestFile { path, content })
    }
}

fn app_view(plan: &DeploymentPlan, app: &ApplicationDescriptor) -> AppView {
    let config = plan.config();
    let name = app.kube_name();
    let namespace = plan.namespace();
    let service_type = if app.application_type.is_exposed() {
        config.service_type.service_spec_type()
    } else {
        ServiceType::ClusterIp.label()
    };

    let mut env = vec![EnvVar::new("SPRING_PROFILES_ACTIVE", "prod")];
    match plan.service_discovery() {
        ServiceDiscovery::Eureka => env.push(EnvVar::new(
            "EUREKA_CLIENT_SERVICE_URL_DEFAULTZONE",
            format!("http://jhipster-registry.{}.svc.cluster.local:8761/eureka/", namespace),
        )),
        ServiceDiscovery::Consul => {
            env.push(EnvVar::new(
                "SPRING_CLOUD_CONSUL_HOST",
                format!("consul.{}.svc.cluster.local", namespace),
            ));
            env.push(EnvVar::new("SPRING_CLOUD_CONSUL_PORT", "8500"));
        }
        ServiceDiscovery::None => {}
    }

    let database = app.database.map(|db| {
        let db_name = format!("{}-{}", name, db.label());
        let host = format!("{}.{}.svc.cluster.local", db_name, namespace);
        let (url_var, url) = match db {
            DatabaseType::Mongodb => (
                "SPRING_DATA_MONGODB_URI",
                format!("mongodb://{}:{}/{}", host, db.port(), name),
            ),
            DatabaseType::Postgresql => (
                "SPRING_DATASOURCE_URL",
                format!("jdbc:postgresql://{}:{}/{}", host, db.port(), name),
            ),
            DatabaseType::Mysql | DatabaseType::Mariadb => (
                "SPRING_DATASOURCE_URL",
                format!(
                    "jdbc:{}://{}:{}/{}?useUnicode=true&characterEncoding=utf8&useSSL=false",
                    db.label(),
                    host,
                    db.port(),
                    name
                ),
            ),
        };
        env.push(EnvVar::new(url_var, url));
        DatabaseView {
            kind: db.label(),
            image: db.image(),
            port: db.port(),
            replicas: app.peer_count(),
            env: db
                .container_env(&name)
                .into_iter()
                .map(|(name, value)| EnvVar { name, value })
                .collect(),
            name: db_name,
        }
    });

    if app.uses_kafka() {
        env.push(EnvVar::new(
            "SPRING_CLOUD_STREAM_KAFKA_BINDER_BROKERS",
            format!("jhipster-kafka.{}.svc.cluster.local:9092", namespace),
        ));
    }

    AppView {
        base_name: app.base_name.to_string(),
        application_type: app.application_type.label(),
        image: app.image_name.clone(),
        port: app.server_port,
        service_type,
        uses_secret: plan.secret_for(app).is_some(),
        env,
        database,
        name,
    }
}
