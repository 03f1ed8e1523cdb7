//! Path composition for resource operations.
//!
//! Paths are relative to the client's base path and include their query
//! string. Segment order is fixed; the service is sensitive to it.

use crate::config::{ApiVersion, SubscriptionId};
use crate::resources::models::{ResourceIdentity, ResourceListParameters};

/// Joins individually encoded filter clauses.
const FILTER_JOIN: &str = "%20and%20";

/// Builds the path for listing resources in a subscription or resource group.
///
/// The query string is `api-version`, then `$top` when non-zero, then
/// `filter` when any filter field is set.
pub fn list_path(
    subscription_id: &SubscriptionId,
    api_version: &ApiVersion,
    parameters: &ResourceListParameters,
) -> String {
    let mut path = format!("/subscriptions/{}", subscription_id.as_ref());
    if let Some(group) = non_blank(parameters.resource_group_name.as_deref()) {
        path.push_str("/resourcegroups/");
        path.push_str(group);
    }
    path.push_str("/resources?api-version=");
    path.push_str(api_version.as_ref());

    if parameters.top != 0 {
        path.push_str(&format!("&$top={}", parameters.top));
    }
    if let Some(filter) = compose_filter(parameters) {
        path.push_str("&filter=");
        path.push_str(&filter);
    }
    path
}

/// Composes the `filter` value, or `None` when no filter field is set.
///
/// Each clause is percent-encoded on its own; the joined value is used as is.
pub fn compose_filter(parameters: &ResourceListParameters) -> Option<String> {
    let clauses: Vec<String> = [
        ("resourceType", parameters.resource_type.as_deref()),
        ("tagName", parameters.tag_name.as_deref()),
        ("tagValue", parameters.tag_value.as_deref()),
    ]
    .into_iter()
    .filter_map(|(field, value)| non_blank(value).map(|value| clause(field, value)))
    .collect();

    if clauses.is_empty() {
        None
    } else {
        Some(clauses.join(FILTER_JOIN))
    }
}

fn clause(field: &str, value: &str) -> String {
    urlencoding::encode(&format!("{field} eq '{value}'")).into_owned()
}

/// Builds the path addressing a single resource.
///
/// The parent segment is omitted when empty. The identity's provider API
/// version is used, not the client's.
pub fn resource_path(
    subscription_id: &SubscriptionId,
    resource_group_name: &str,
    identity: &ResourceIdentity,
) -> String {
    let mut path = format!(
        "/subscriptions/{}/resourcegroups/{}/providers/{}",
        subscription_id.as_ref(),
        resource_group_name,
        identity.resource_provider_namespace,
    );
    let parent = identity.parent_resource_path.trim_matches('/');
    if !parent.is_empty() {
        path.push('/');
        path.push_str(parent);
    }
    path.push_str(&format!(
        "/{}/{}?api-version={}",
        identity.resource_type, identity.resource_name, identity.resource_provider_api_version
    ));
    path
}

/// Builds the path for moving resources out of `source_group`.
pub fn move_path(
    subscription_id: &SubscriptionId,
    source_group: &str,
    api_version: &ApiVersion,
) -> String {
    format!(
        "/subscriptions/{}/resourcegroups/{}/moveResources?api-version={}",
        subscription_id.as_ref(),
        source_group,
        api_version.as_ref()
    )
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub() -> SubscriptionId {
        SubscriptionId::new("sub-1").unwrap()
    }

    fn identity() -> ResourceIdentity {
        ResourceIdentity::new("Microsoft.Web", "sites", "app1", "2014-04-01")
    }

    #[test]
    fn test_list_path_subscription_scope() {
        let path = list_path(
            &sub(),
            &ApiVersion::default(),
            &ResourceListParameters::default(),
        );
        assert_eq!(path, "/subscriptions/sub-1/resources?api-version=2015-01-01");
    }

    #[test]
    fn test_list_path_group_then_top() {
        let parameters = ResourceListParameters {
            resource_group_name: Some("rg1".to_string()),
            top: 10,
            ..ResourceListParameters::default()
        };
        let path = list_path(&sub(), &ApiVersion::default(), &parameters);
        assert!(path.ends_with("/resourcegroups/rg1/resources?api-version=2015-01-01&$top=10"));
    }

    #[test]
    fn test_list_path_filter_comes_last() {
        let parameters = ResourceListParameters {
            resource_type: Some("Microsoft.Web/sites".to_string()),
            top: 5,
            ..ResourceListParameters::default()
        };
        let path = list_path(&sub(), &ApiVersion::default(), &parameters);
        assert_eq!(
            path,
            "/subscriptions/sub-1/resources?api-version=2015-01-01&$top=5\
             &filter=resourceType%20eq%20%27Microsoft.Web%2Fsites%27"
        );
    }

    #[test]
    fn test_filter_clauses_are_joined() {
        let parameters = ResourceListParameters {
            resource_type: Some("T".to_string()),
            tag_name: Some("env".to_string()),
            tag_value: Some("prod".to_string()),
            ..ResourceListParameters::default()
        };
        assert_eq!(
            compose_filter(&parameters).unwrap(),
            "resourceType%20eq%20%27T%27%20and%20tagName%20eq%20%27env%27\
             %20and%20tagValue%20eq%20%27prod%27"
        );
    }

    #[test]
    fn test_tag_value_filter_uses_tag_value() {
        let parameters = ResourceListParameters {
            resource_type: Some("T".to_string()),
            tag_value: Some("blue".to_string()),
            ..ResourceListParameters::default()
        };
        let filter = compose_filter(&parameters).unwrap();
        assert!(filter.ends_with("tagValue%20eq%20%27blue%27"));
        assert_eq!(filter.matches("resourceType").count(), 1);
    }

    #[test]
    fn test_blank_fields_produce_no_filter() {
        let parameters = ResourceListParameters {
            resource_group_name: Some("  ".to_string()),
            resource_type: Some(String::new()),
            ..ResourceListParameters::default()
        };
        assert!(compose_filter(&parameters).is_none());
        assert_eq!(
            list_path(&sub(), &ApiVersion::default(), &parameters),
            "/subscriptions/sub-1/resources?api-version=2015-01-01"
        );
    }

    #[test]
    fn test_resource_path_omits_empty_parent() {
        assert_eq!(
            resource_path(&sub(), "rg1", &identity()),
            "/subscriptions/sub-1/resourcegroups/rg1/providers/Microsoft.Web/sites/app1?api-version=2014-04-01"
        );
    }

    #[test]
    fn test_resource_path_with_parent() {
        let identity = ResourceIdentity::new("Microsoft.Sql", "databases", "db1", "2014-04-01")
            .with_parent("servers/sql1");
        assert_eq!(
            resource_path(&sub(), "rg1", &identity),
            "/subscriptions/sub-1/resourcegroups/rg1/providers/Microsoft.Sql/servers/sql1/databases/db1?api-version=2014-04-01"
        );
    }

    #[test]
    fn test_path_segments_are_not_encoded() {
        let identity = ResourceIdentity::new("Microsoft.Web", "sites", "my app", "2014-04-01");
        assert_eq!(
            resource_path(&sub(), "group one", &identity),
            "/subscriptions/sub-1/resourcegroups/group one/providers/Microsoft.Web/sites/my app?api-version=2014-04-01"
        );
    }

    #[test]
    fn test_move_path_uses_client_version() {
        let version: ApiVersion = "2016-02-01".parse().unwrap();
        assert_eq!(
            move_path(&sub(), "src", &version),
            "/subscriptions/sub-1/resourcegroups/src/moveResources?api-version=2016-02-01"
        );
    }
}
