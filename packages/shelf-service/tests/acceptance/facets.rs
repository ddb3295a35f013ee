use shelf_service::{FacetRequest, ListRequest};
use shelf_storage::tenant::TenantId;

fn facet(tenant_id: TenantId, prefix: Option<&str>) -> FacetRequest {
	FacetRequest { tenant_id, prefix: prefix.map(str::to_string) }
}

fn filtered(
	tenant_id: TenantId,
	category: Option<&str>,
	tags: Option<Vec<String>>,
) -> ListRequest {
	ListRequest {
		tenant_id,
		query: None,
		category: category.map(str::to_string),
		tags,
		limit: 20,
		offset: 0,
	}
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set SHELF_PG_DSN to run."]
async fn categories_cap_at_fifty_by_usage() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping categories_cap_at_fifty_by_usage; set SHELF_PG_DSN to run.");

		return;
	};
	let service = super::build_service(super::test_config(test_db.dsn().to_string()))
		.await
		.expect("Failed to build service.");

	super::reset_db(&service.db.pool).await.expect("Failed to reset test database.");

	let tenant_id = super::tenant();

	// Category 59 is used four times, 58 three times, 57 twice and the rest once.
	for n in 0..60 {
		let uses = match n {
			59 => 4,
			58 => 3,
			57 => 2,
			_ => 1,
		};

		for _ in 0..uses {
			let mut req = super::prompt(tenant_id, "Categorized", "Body.");

			req.category = Some(format!("cat-{n:02}"));

			super::create(&service, req).await;
		}
	}

	super::create(&service, super::prompt(tenant_id, "Uncategorized", "Body.")).await;

	let categories =
		service.list_categories(facet(tenant_id, None)).await.expect("Failed to list categories.");

	assert_eq!(categories.values.len(), 50);
	assert_eq!(&categories.values[..4], ["cat-59", "cat-58", "cat-57", "cat-00"]);
	// Single-use categories follow in value order.
	assert_eq!(categories.values[49], "cat-46");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set SHELF_PG_DSN to run."]
async fn tags_are_counted_per_occurrence_and_cap_at_twenty() {
	let Some(test_db) = super::test_db().await else {
		eprintln!(
			"Skipping tags_are_counted_per_occurrence_and_cap_at_twenty; set SHELF_PG_DSN to run."
		);

		return;
	};
	let service = super::build_service(super::test_config(test_db.dsn().to_string()))
		.await
		.expect("Failed to build service.");

	super::reset_db(&service.db.pool).await.expect("Failed to reset test database.");

	let tenant_id = super::tenant();

	// "common" appears on three prompts, "pair" on two; every prompt adds a unique tag.
	for n in 0..25 {
		let unique = format!("tag-{n:02}");
		let mut labels = vec![unique.as_str()];

		if n < 3 {
			labels.push("common");
		}
		if n < 2 {
			labels.push("pair");
		}

		let mut req = super::prompt(tenant_id, "Tagged", "Body.");

		req.tags = super::tags(&labels);

		super::create(&service, req).await;
	}

	let tags = service.list_tags(facet(tenant_id, None)).await.expect("Failed to list tags.");

	assert_eq!(tags.values.len(), 20);
	assert_eq!(&tags.values[..3], ["common", "pair", "tag-00"]);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set SHELF_PG_DSN to run."]
async fn prefix_is_case_insensitive_and_literal() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping prefix_is_case_insensitive_and_literal; set SHELF_PG_DSN to run.");

		return;
	};
	let service = super::build_service(super::test_config(test_db.dsn().to_string()))
		.await
		.expect("Failed to build service.");

	super::reset_db(&service.db.pool).await.expect("Failed to reset test database.");

	let tenant_id = super::tenant();

	for (category, labels) in [
		("Writing", ["Rust", "100%_done"]),
		("writing-tools", ["rustfmt", "100x_done"]),
		("Research", ["python", "100%-done"]),
	] {
		let mut req = super::prompt(tenant_id, "Faceted", "Body.");

		req.category = Some(category.to_string());
		req.tags = super::tags(&labels);

		super::create(&service, req).await;
	}

	let categories = service
		.list_categories(facet(tenant_id, Some("WRIT")))
		.await
		.expect("Failed to list categories.");

	assert_eq!(categories.values, vec!["Writing", "writing-tools"]);

	let rust =
		service.list_tags(facet(tenant_id, Some("rust"))).await.expect("Failed to list tags.");

	assert_eq!(rust.values, vec!["Rust", "rustfmt"]);

	let literal =
		service.list_tags(facet(tenant_id, Some("100%_"))).await.expect("Failed to list tags.");

	assert_eq!(literal.values, vec!["100%_done"]);

	let blank =
		service.list_tags(facet(tenant_id, Some("  "))).await.expect("Failed to list tags.");

	assert_eq!(blank.values.len(), 6);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set SHELF_PG_DSN to run."]
async fn every_facet_value_filters_back_to_its_prompt() {
	let Some(test_db) = super::test_db().await else {
		eprintln!(
			"Skipping every_facet_value_filters_back_to_its_prompt; set SHELF_PG_DSN to run."
		);

		return;
	};
	let service = super::build_service(super::test_config(test_db.dsn().to_string()))
		.await
		.expect("Failed to build service.");

	super::reset_db(&service.db.pool).await.expect("Failed to reset test database.");

	let tenant_id = super::tenant();
	let mut req = super::prompt(tenant_id, "Padded", "Body.");

	req.category = Some("  Drafts ".to_string());
	req.tags = super::tags(&[" padded ", "", "plain", "plain"]);

	let created = super::create(&service, req).await;
	let tags = service.list_tags(facet(tenant_id, None)).await.expect("Failed to list tags.");

	assert_eq!(tags.values, vec!["padded", "plain"]);

	for value in &tags.values {
		let listed = service
			.list(filtered(tenant_id, None, Some(vec![value.clone()])))
			.await
			.expect("Failed to list prompts.");

		assert_eq!(listed.total, 1, "Tag {value:?} did not find its prompt.");
		assert_eq!(super::ids(&listed.records), vec![created.prompt_id]);
	}

	let categories =
		service.list_categories(facet(tenant_id, None)).await.expect("Failed to list categories.");

	assert_eq!(categories.values, vec!["Drafts"]);

	let listed = service
		.list(filtered(tenant_id, Some(&categories.values[0]), None))
		.await
		.expect("Failed to list prompts.");

	assert_eq!(listed.total, 1);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
