//! Behaviour of the in-memory catalogue adapter.

use rstest::{fixture, rstest};

use super::*;

#[fixture]
fn catalogue() -> InMemoryCatalogue {
    InMemoryCatalogue::new()
}

fn region_draft(code: &str, name: &str) -> RegionDraft {
    RegionDraft {
        code: code.to_owned(),
        name: name.to_owned(),
        area: 100.0,
        lat: -41.3,
        long: 174.8,
        population: 200_000,
    }
}

async fn seed_walk(catalogue: &InMemoryCatalogue) -> (Region, WalkDifficulty, Walk) {
    let region = RegionRepository::add(catalogue, region_draft("WGN", "Wellington"))
        .await
        .expect("add region");
    let difficulty = WalkDifficultyRepository::add(
        catalogue,
        WalkDifficultyDraft {
            code: "Easy".to_owned(),
        },
    )
    .await
    .expect("add difficulty");
    let walk = WalkRepository::add(
        catalogue,
        WalkDraft {
            name: "Red Rocks".to_owned(),
            length: 8.0,
            region_id: region.id,
            walk_difficulty_id: difficulty.id,
        },
    )
    .await
    .expect("add walk");
    (region, difficulty, walk)
}

#[rstest]
#[tokio::test]
async fn add_then_find_returns_equal_region(catalogue: InMemoryCatalogue) {
    let added = RegionRepository::add(&catalogue, region_draft("WGN", "Wellington"))
        .await
        .expect("add region");

    let found = RegionRepository::find_by_id(&catalogue, &added.id)
        .await
        .expect("find region");

    assert_eq!(found, Some(added));
}

#[rstest]
#[tokio::test]
async fn list_keeps_insertion_order(catalogue: InMemoryCatalogue) {
    for (code, name) in [("WGN", "Wellington"), ("AKL", "Auckland"), ("NSN", "Nelson")] {
        RegionRepository::add(&catalogue, region_draft(code, name))
            .await
            .expect("add region");
    }

    let codes: Vec<String> = RegionRepository::list(&catalogue)
        .await
        .expect("list regions")
        .into_iter()
        .map(|region| region.code)
        .collect();

    assert_eq!(codes, ["WGN", "AKL", "NSN"]);
}

#[rstest]
#[tokio::test]
async fn update_replaces_every_field(catalogue: InMemoryCatalogue) {
    let added = RegionRepository::add(&catalogue, region_draft("WGN", "Wellington"))
        .await
        .expect("add region");
    let replacement = RegionDraft {
        area: 444.0,
        population: 0,
        ..region_draft("WLG", "Greater Wellington")
    };

    let updated = RegionRepository::update(&catalogue, &added.id, replacement.clone())
        .await
        .expect("update region")
        .expect("region exists");

    assert_eq!(updated, Region::from_draft(added.id, replacement));
}

#[rstest]
#[tokio::test]
async fn unknown_ids_are_absent(catalogue: InMemoryCatalogue) {
    let region_id = RegionId::random();
    let walk_id = WalkId::random();
    let difficulty_id = WalkDifficultyId::random();

    assert!(
        RegionRepository::update(&catalogue, &region_id, region_draft("X", "Y"))
            .await
            .expect("update")
            .is_none()
    );
    assert!(
        RegionRepository::delete(&catalogue, &region_id)
            .await
            .expect("delete")
            .is_none()
    );
    assert!(
        WalkDifficultyRepository::delete(&catalogue, &difficulty_id)
            .await
            .expect("delete")
            .is_none()
    );
    assert!(
        WalkRepository::find_by_id(&catalogue, &walk_id)
            .await
            .expect("find")
            .is_none()
    );
}

#[rstest]
#[tokio::test]
async fn delete_returns_prior_state_and_removes_row(catalogue: InMemoryCatalogue) {
    let added = WalkDifficultyRepository::add(
        &catalogue,
        WalkDifficultyDraft {
            code: "Hard".to_owned(),
        },
    )
    .await
    .expect("add difficulty");

    let removed = WalkDifficultyRepository::delete(&catalogue, &added.id)
        .await
        .expect("delete difficulty");

    assert_eq!(removed, Some(added.clone()));
    assert!(
        WalkDifficultyRepository::find_by_id(&catalogue, &added.id)
            .await
            .expect("find difficulty")
            .is_none()
    );
}

#[rstest]
#[tokio::test]
async fn walk_reads_join_relations_and_writes_do_not(catalogue: InMemoryCatalogue) {
    let (region, difficulty, added) = seed_walk(&catalogue).await;
    assert!(added.region.is_none());

    let found = WalkRepository::find_by_id(&catalogue, &added.id)
        .await
        .expect("find walk")
        .expect("walk exists");

    assert_eq!(found.region, Some(region));
    assert_eq!(found.walk_difficulty, Some(difficulty));
}

#[rstest]
#[tokio::test]
async fn walk_with_unknown_region_is_rejected(catalogue: InMemoryCatalogue) {
    let difficulty = WalkDifficultyRepository::add(
        &catalogue,
        WalkDifficultyDraft {
            code: "Easy".to_owned(),
        },
    )
    .await
    .expect("add difficulty");

    let result = WalkRepository::add(
        &catalogue,
        WalkDraft {
            name: "Ghost Track".to_owned(),
            length: 1.0,
            region_id: RegionId::random(),
            walk_difficulty_id: difficulty.id,
        },
    )
    .await;

    assert_eq!(result, Err(RepositoryError::missing_reference("RegionId")));
}

#[rstest]
#[tokio::test]
async fn walk_update_rechecks_references(catalogue: InMemoryCatalogue) {
    let (region, _, walk) = seed_walk(&catalogue).await;

    let result = WalkRepository::update(
        &catalogue,
        &walk.id,
        WalkDraft {
            name: walk.name.clone(),
            length: walk.length,
            region_id: region.id,
            walk_difficulty_id: WalkDifficultyId::random(),
        },
    )
    .await;

    assert_eq!(
        result,
        Err(RepositoryError::missing_reference("WalkDifficultyId"))
    );
}

#[rstest]
#[tokio::test]
async fn deleting_region_cascades_to_walks(catalogue: InMemoryCatalogue) {
    let (region, _, walk) = seed_walk(&catalogue).await;

    RegionRepository::delete(&catalogue, &region.id)
        .await
        .expect("delete region");

    assert!(
        WalkRepository::find_by_id(&catalogue, &walk.id)
            .await
            .expect("find walk")
            .is_none()
    );
    assert!(
        WalkRepository::list(&catalogue)
            .await
            .expect("list walks")
            .is_empty()
    );
}
