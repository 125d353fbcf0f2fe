use std::sync::Arc;

use smarteru_ox::{
    Credentials, GetUserGroupsQuery, GetUserQuery, GroupPermissions, ListUsersQuery, MatchTag,
    MockTransport, Permission, SmarterU, SmarterURequestError, Status, User,
};

const FAILED: &str = "<SmarterU><Result>Failed</Result><Info/><Errors>\
    <Error><ErrorID>Error1</ErrorID><ErrorMessage>Testing</ErrorMessage></Error>\
    <Error><ErrorID>Error2</ErrorID><ErrorMessage>123</ErrorMessage></Error>\
    </Errors></SmarterU>";

fn success(info: &str) -> String {
    format!("<SmarterU><Result>Success</Result><Info>{info}</Info><Errors></Errors></SmarterU>")
}

fn client(mock: &MockTransport) -> SmarterU {
    SmarterU::builder()
        .account_api("account")
        .user_api("user")
        .transport(Arc::new(mock.clone()))
        .build()
}

fn user() -> User {
    User::builder()
        .email("learner@test.com")
        .employee_id("1")
        .given_name("Test")
        .surname("User")
        .password("password")
        .status(Status::Active)
        .teams(vec!["team1".into()])
        .groups(vec![
            GroupPermissions::by_name("Group1").with_permission(Permission::grant("MANAGE_USERS")),
        ])
        .build()
}

#[tokio::test]
async fn create_user_posts_package_and_echoes_identity() {
    let mock = MockTransport::new();
    mock.respond_ok(success("<Email>learner@test.com</Email><EmployeeID>1</EmployeeID>"));
    let user = user();

    let response = client(&mock).create_user(&user).await.unwrap();

    assert_eq!(response.response.email, user.email.clone().unwrap());
    assert_eq!(response.response.employee_id, user.employee_id.clone().unwrap());
    assert!(response.errors.is_empty());

    let history = mock.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].method, reqwest::Method::POST);
    assert_eq!(history[0].url, "https://api.smarteru.com/apiv2/");
    let expected = user
        .to_xml(&Credentials::new("account", "user"), smarteru_ox::Method::CreateUser)
        .unwrap();
    assert_eq!(history[0].package(), Some(expected.as_str()));
}

#[tokio::test]
async fn update_user_uses_update_method() {
    let mock = MockTransport::new();
    mock.respond_ok(success("<Email>learner@test.com</Email><EmployeeID>1</EmployeeID>"));

    client(&mock).update_user(&user()).await.unwrap();

    let package = mock.last_package().unwrap();
    assert!(package.contains("<Method>updateUser</Method>"));
    assert!(package.contains("<Venues/><Wages/>"));
}

#[tokio::test]
async fn missing_keys_fail_before_any_request() {
    let mock = MockTransport::new();
    let no_keys = SmarterU::builder().transport(Arc::new(mock.clone())).build();

    let err = no_keys.get_user(&GetUserQuery::by_id("1")).await.unwrap_err();
    assert_eq!(
        err,
        SmarterURequestError::MissingValue(
            "Account API key must be set before creating a query.".into()
        )
    );
    assert!(err.is_local());

    let account_only = SmarterU::builder()
        .account_api("account")
        .transport(Arc::new(mock.clone()))
        .build();
    let err = account_only.create_user(&user()).await.unwrap_err();
    assert_eq!(
        err,
        SmarterURequestError::MissingValue(
            "User API key must be set before creating a query.".into()
        )
    );

    let err = account_only
        .get_user_groups(&GetUserGroupsQuery::new())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        SmarterURequestError::MissingValue(
            "User API key must be set before creating a query.".into()
        )
    );

    assert!(mock.history().is_empty());
}

#[tokio::test]
async fn missing_identifier_is_reported_once_keys_are_present() {
    let mock = MockTransport::new();

    let err = client(&mock).get_user(&GetUserQuery::new()).await.unwrap_err();

    assert_eq!(
        err,
        SmarterURequestError::MissingValue(
            "User identifier must be specified when creating a GetUserQuery.".into()
        )
    );
    assert!(mock.history().is_empty());
}

#[tokio::test]
async fn query_keys_override_client_keys() {
    let mock = MockTransport::new();
    mock.respond_ok(success("<User><ID>1</ID></User>"));
    let query = GetUserQuery::by_id("1")
        .with_credentials(Credentials::new("query-account", "query-user"));

    client(&mock).get_user(&query).await.unwrap();

    let package = mock.last_package().unwrap();
    assert!(
        package.contains("<AccountAPI>query-account</AccountAPI><UserAPI>query-user</UserAPI>")
    );
    assert_eq!(query.credentials, Credentials::new("query-account", "query-user"));
}

#[tokio::test]
async fn failed_result_is_fatal_for_every_operation() {
    let mock = MockTransport::new();
    for _ in 0..5 {
        mock.respond_ok(FAILED);
    }
    let client = client(&mock);
    let expected = SmarterURequestError::Api("Error1: Testing, Error2: 123".into());

    assert_eq!(client.create_user(&user()).await.unwrap_err(), expected);
    assert_eq!(client.get_user(&GetUserQuery::by_id("1")).await.unwrap_err(), expected);
    assert_eq!(client.list_users(&ListUsersQuery::default()).await.unwrap_err(), expected);
    assert_eq!(client.update_user(&user()).await.unwrap_err(), expected);
    assert_eq!(
        client
            .get_user_groups(&GetUserGroupsQuery::by_email("a@b.c"))
            .await
            .unwrap_err(),
        expected
    );
    assert_eq!(expected.to_string(), "Error1: Testing, Error2: 123");
}

#[tokio::test]
async fn http_404_wins_over_body_content() {
    let mock = MockTransport::new();
    mock.respond(404, FAILED);

    let err = client(&mock).get_user(&GetUserQuery::by_id("1")).await.unwrap_err();

    assert_eq!(
        err,
        SmarterURequestError::Http(
            "Client error: POST https://api.smarteru.com/apiv2/ \
             resulted in a `404 Not Found` response"
                .into()
        )
    );
}

#[tokio::test]
async fn transport_failures_surface_as_http() {
    let mock = MockTransport::new();
    mock.fail("connection reset");

    let err = client(&mock).list_users(&ListUsersQuery::default()).await.unwrap_err();
    assert_eq!(err, SmarterURequestError::Http("connection reset".into()));
}

#[tokio::test]
async fn non_fatal_errors_come_back_as_data() {
    let mock = MockTransport::new();
    mock.respond_ok(
        "<SmarterU><Result>Success</Result><Info><User><ID>7</ID><Email>a@b.c</Email></User></Info>\
         <Errors><Error><ErrorID>Error1</ErrorID>\
         <ErrorMessage>Testing</ErrorMessage></Error></Errors>\
         </SmarterU>",
    );

    let response = client(&mock).get_user(&GetUserQuery::by_email("a@b.c")).await.unwrap();

    assert_eq!(response.response.id, "7");
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors["Error1"], "Testing");
}

#[tokio::test]
async fn list_users_returns_each_user_in_order() {
    let mock = MockTransport::new();
    mock.respond_ok(success(
        "<Users>\
         <User><ID>1</ID><GivenName>A</GivenName><Surname>One</Surname>\
         <Teams><Team>t1</Team></Teams></User>\
         <User><ID>2</ID><GivenName>B</GivenName><Surname>Two</Surname>\
         <Teams><Team>t2</Team><Team>t3</Team></Teams></User>\
         <User><ID>3</ID><GivenName>C</GivenName><Surname>Three</Surname></User>\
         </Users>",
    ));
    let query = ListUsersQuery::builder()
        .page_size(5000)
        .email(MatchTag::contains("@test.com"))
        .build();

    let users = client(&mock).list_users(&query).await.unwrap().into_response();

    let ids: Vec<&str> = users.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
    assert_eq!(users[1].name, "B Two");
    assert_eq!(users[1].teams, vec!["t2", "t3"]);
    assert!(users[2].teams.is_empty());

    let package = mock.last_package().unwrap();
    assert!(package.contains("<PageSize>1000</PageSize>"));
    assert!(
        package.contains("<Email><MatchType>CONTAINS</MatchType><Value>@test.com</Value></Email>")
    );
}

#[tokio::test]
async fn get_user_groups_normalises_one_and_many() {
    let group = |n: u32| {
        format!(
            "<Group><Name>G{n}</Name><Identifier>{n}</Identifier><IsHomeGroup>0</IsHomeGroup>\
             <Permissions><Permission>MANAGE_USERS</Permission></Permissions></Group>"
        )
    };
    let mock = MockTransport::new();
    mock.respond_ok(success(&format!("<UserGroups>{}</UserGroups>", group(1))));
    mock.respond_ok(success(&format!(
        "<UserGroups>{}{}{}</UserGroups>",
        group(1),
        group(2),
        group(3)
    )));
    let client = client(&mock);
    let query = GetUserGroupsQuery::by_employee_id("1");

    let one = client.get_user_groups(&query).await.unwrap().response;
    let three = client.get_user_groups(&query).await.unwrap().response;

    assert_eq!(one.len(), 1);
    assert_eq!(three.len(), 3);
    assert_eq!(one[0], three[0]);
    assert_eq!(three[2].permissions, vec!["MANAGE_USERS"]);
    assert!(mock.last_package().unwrap().contains("<User><EmployeeID>1</EmployeeID></User>"));
}
