use shelf_service::ListRequest;

#[tokio::test]
#[ignore = "Requires external Postgres. Set SHELF_PG_DSN to run."]
async fn tags_filter_requires_every_listed_tag() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping tags_filter_requires_every_listed_tag; set SHELF_PG_DSN to run.");

		return;
	};
	let service = super::build_service(super::test_config(test_db.dsn().to_string()))
		.await
		.expect("Failed to build service.");

	super::reset_db(&service.db.pool).await.expect("Failed to reset test database.");

	let tenant_id = super::tenant();
	let mut req = super::prompt(tenant_id, "Tagged", "Carries x, y and z.");

	req.tags = super::tags(&["x", "y", "z"]);

	let record = super::create(&service, req).await;
	let cases: [(&[&str], bool); 7] = [
		(&[], true),
		(&["x"], true),
		(&["y", "x"], true),
		(&["x", "y", "z"], true),
		(&["z", "z", "x"], true),
		(&["w"], false),
		(&["x", "w"], false),
	];

	for (required, matches) in cases {
		let listed = service
			.list(ListRequest {
				tenant_id,
				query: None,
				category: None,
				tags: super::tags(required),
				limit: 20,
				offset: 0,
			})
			.await
			.expect("Failed to list prompts.");
		let expected = if matches { vec![record.prompt_id] } else { Vec::new() };

		assert_eq!(super::ids(&listed.records), expected, "Required tags: {required:?}.");
		assert_eq!(listed.total, expected.len() as i64);
	}

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set SHELF_PG_DSN to run."]
async fn filters_combine_with_and() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping filters_combine_with_and; set SHELF_PG_DSN to run.");

		return;
	};
	let service = super::build_service(super::test_config(test_db.dsn().to_string()))
		.await
		.expect("Failed to build service.");

	super::reset_db(&service.db.pool).await.expect("Failed to reset test database.");

	let tenant_id = super::tenant();
	let mut matching = super::prompt(tenant_id, "Database migrations", "Plan the rollout.");

	matching.category = Some("ops".to_string());
	matching.tags = super::tags(&["postgres", "deploy"]);

	let mut wrong_category = super::prompt(tenant_id, "Database migrations", "Plan the rollout.");

	wrong_category.category = Some("dev".to_string());
	wrong_category.tags = super::tags(&["postgres", "deploy"]);

	let mut missing_tag = super::prompt(tenant_id, "Database migrations", "Plan the rollout.");

	missing_tag.category = Some("ops".to_string());
	missing_tag.tags = super::tags(&["postgres"]);

	let mut no_text_match = super::prompt(tenant_id, "Release notes", "Write them.");

	no_text_match.category = Some("ops".to_string());
	no_text_match.tags = super::tags(&["postgres", "deploy"]);

	let expected = super::create(&service, matching).await;

	for req in [wrong_category, missing_tag, no_text_match] {
		super::create(&service, req).await;
	}

	let listed = service
		.list(ListRequest {
			tenant_id,
			query: Some("migration".to_string()),
			category: Some("ops".to_string()),
			tags: super::tags(&["deploy"]),
			limit: 20,
			offset: 0,
		})
		.await
		.expect("Failed to list prompts.");

	assert_eq!(super::ids(&listed.records), vec![expected.prompt_id]);
	assert_eq!(listed.total, 1);

	// Blank parameters impose no constraint.
	let unfiltered = service
		.list(ListRequest {
			tenant_id,
			query: Some("   ".to_string()),
			category: Some(String::new()),
			tags: super::tags(&[" ", ""]),
			limit: 20,
			offset: 0,
		})
		.await
		.expect("Failed to list prompts.");

	assert_eq!(unfiltered.total, 4);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
