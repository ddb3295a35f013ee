use shelf_service::{ListRequest, PromptRecord};

fn search(tenant_id: shelf_storage::tenant::TenantId, query: Option<&str>) -> ListRequest {
	ListRequest {
		tenant_id,
		query: query.map(str::to_string),
		category: None,
		tags: None,
		limit: 20,
		offset: 0,
	}
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set SHELF_PG_DSN to run."]
async fn title_outranks_tags_outranks_body() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping title_outranks_tags_outranks_body; set SHELF_PG_DSN to run.");

		return;
	};
	let service = super::build_service(super::test_config(test_db.dsn().to_string()))
		.await
		.expect("Failed to build service.");

	super::reset_db(&service.db.pool).await.expect("Failed to reset test database.");

	let tenant_id = super::tenant();
	let mut in_body =
		super::prompt(tenant_id, "Cluster notes", "Scale the kubernetes deployment.");

	in_body.tags = super::tags(&["ops"]);

	let mut in_tags = super::prompt(tenant_id, "Cluster notes", "Scale the deployment.");

	in_tags.tags = super::tags(&["kubernetes"]);

	let mut in_title = super::prompt(tenant_id, "Kubernetes notes", "Scale the deployment.");

	in_title.tags = super::tags(&["ops"]);

	// Created oldest first so recency alone would produce the opposite order.
	let body = super::create(&service, in_body).await;
	let tags = super::create(&service, in_tags).await;
	let title = super::create(&service, in_title).await;

	super::create(&service, super::prompt(tenant_id, "Unrelated", "Nothing to see.")).await;

	let listed = service
		.list(search(tenant_id, Some("Kubernetes")))
		.await
		.expect("Failed to list prompts.");

	assert_eq!(listed.total, 3);
	assert_eq!(
		super::ids(&listed.records),
		vec![title.prompt_id, tags.prompt_id, body.prompt_id]
	);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set SHELF_PG_DSN to run."]
async fn equal_rank_falls_back_to_recency() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping equal_rank_falls_back_to_recency; set SHELF_PG_DSN to run.");

		return;
	};
	let service = super::build_service(super::test_config(test_db.dsn().to_string()))
		.await
		.expect("Failed to build service.");

	super::reset_db(&service.db.pool).await.expect("Failed to reset test database.");

	let tenant_id = super::tenant();
	let mut created = Vec::new();

	for n in 0..4 {
		created.push(
			super::create(
				&service,
				super::prompt(tenant_id, "Haiku prompt", &format!("Variant {n}.")),
			)
			.await,
		);
	}

	let listed =
		service.list(search(tenant_id, Some("haiku"))).await.expect("Failed to list prompts.");

	assert_eq!(super::ids(&listed.records), expected_recency_order(&created));

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set SHELF_PG_DSN to run."]
async fn no_query_orders_by_updated_at_then_id() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping no_query_orders_by_updated_at_then_id; set SHELF_PG_DSN to run.");

		return;
	};
	let service = super::build_service(super::test_config(test_db.dsn().to_string()))
		.await
		.expect("Failed to build service.");

	super::reset_db(&service.db.pool).await.expect("Failed to reset test database.");

	let tenant_id = super::tenant();
	let mut created = Vec::new();

	for n in 0..5 {
		created.push(
			super::create(&service, super::prompt(tenant_id, &format!("Note {n}"), "Body.")).await,
		);
	}

	// Touching the oldest record moves it to the front.
	let touched = service
		.update(shelf_service::UpdatePromptRequest {
			tenant_id,
			prompt_id: created[0].prompt_id,
			title: "Note 0 revised".to_string(),
			body: "Body.".to_string(),
			category: None,
			tags: None,
		})
		.await
		.expect("Failed to update prompt.");

	created[0] = touched;

	let listed = service.list(search(tenant_id, None)).await.expect("Failed to list prompts.");

	assert_eq!(listed.records[0].prompt_id, created[0].prompt_id);
	assert_eq!(super::ids(&listed.records), expected_recency_order(&created));

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set SHELF_PG_DSN to run."]
async fn stop_word_only_query_matches_nothing() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping stop_word_only_query_matches_nothing; set SHELF_PG_DSN to run.");

		return;
	};
	let service = super::build_service(super::test_config(test_db.dsn().to_string()))
		.await
		.expect("Failed to build service.");

	super::reset_db(&service.db.pool).await.expect("Failed to reset test database.");

	let tenant_id = super::tenant();

	super::create(&service, super::prompt(tenant_id, "The and of", "A the an.")).await;

	let listed =
		service.list(search(tenant_id, Some("the"))).await.expect("Failed to list prompts.");

	assert_eq!(listed.total, 0);
	assert!(listed.records.is_empty());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

fn expected_recency_order(records: &[PromptRecord]) -> Vec<uuid::Uuid> {
	let mut sorted = records.to_vec();

	sorted.sort_by(|a, b| {
		b.updated_at.cmp(&a.updated_at).then_with(|| a.prompt_id.cmp(&b.prompt_id))
	});

	super::ids(&sorted)
}
