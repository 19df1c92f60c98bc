//! Application records used across contracts.

use super::TestContext;

pub(crate) const GATEWAY: &str = r#"{
    "baseName": "gateway",
    "applicationType": "gateway",
    "serverPort": 8080,
    "prodDatabaseType": "mysql",
    "authenticationType": "jwt"
}"#;

pub(crate) const STORE: &str = r#"{
    "baseName": "store",
    "applicationType": "microservice",
    "serverPort": 8081,
    "prodDatabaseType": "mongodb",
    "messageBroker": "kafka",
    "clusteredDb": true
}"#;

pub(crate) const CART: &str = r#"{
    "baseName": "cart",
    "applicationType": "microservice",
    "serverPort": 8082,
    "prodDatabaseType": "postgresql",
    "messageBroker": false
}"#;

/// Gateway, clustered store and standalone cart, all with Jib caches.
pub(crate) fn three_app_scenario(ctx: &TestContext) {
    for (folder, record) in [("gateway", GATEWAY), ("store", STORE), ("cart", CART)] {
        ctx.write_app(folder, record);
        ctx.write_jib_cache(folder);
    }
}

pub(crate) const SCENARIO_APPS: &str = "gateway,store,cart";
