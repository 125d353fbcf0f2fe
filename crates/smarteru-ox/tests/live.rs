use smarteru_ox::{ListUsersQuery, SmarterU, UserStatusFilter};

fn get_client() -> SmarterU {
    SmarterU::load_from_env()
        .expect("SMARTERU_ACCOUNT_API_KEY and SMARTERU_USER_API_KEY must be set for live tests")
}

#[tokio::test]
#[ignore = "requires SMARTERU_ACCOUNT_API_KEY and SMARTERU_USER_API_KEY and makes real API calls"]
async fn test_list_users() {
    let client = get_client();
    let query = ListUsersQuery::builder()
        .page_size(5)
        .user_status(UserStatusFilter::Active)
        .build();

    let response = client.list_users(&query).await;
    assert!(response.is_ok(), "{response:?}");

    let users = response.unwrap().into_response();
    assert!(users.len() <= 5);
}
