//! Full encounter-to-victory flow driven the way a scene orchestrator would:
//! encounter roll, alternating attack turns, reward grant, experience, loot,
//! and inventory merge, all against a scripted random source.

use std::collections::HashMap;

use pd_core::{
    BattleStats, EncounterConfig, GameRng, Health, Item, ItemCategory, ItemDatabase, ItemEffect,
    ItemStack, LootEntry, MonsterTable, MonsterTemplate, PlayerStats, RandomSource, ScriptedRng,
    add_experience, add_item, apply_effect, calculate_damage, calculate_rewards, check_encounter,
    try_escape, use_item,
};

fn monster_table() -> MonsterTable {
    let mut table = HashMap::new();
    table.insert(
        "slime".to_string(),
        MonsterTemplate {
            id: "slime".into(),
            name: "Slime".into(),
            hp: 14,
            attack_min: 3,
            attack_max: 6,
            defense: 2,
            exp: 15,
            gold: 10,
        },
    );
    table
}

fn item_database() -> ItemDatabase {
    let mut database = HashMap::new();
    database.insert(
        "herb".to_string(),
        Item {
            id: "herb".into(),
            name: "Herb".into(),
            description: "Restores a little HP.".into(),
            category: ItemCategory::Consumable,
            stackable: true,
            effect: Some(ItemEffect::HealHp(30)),
        },
    );
    database
}

#[test]
fn scripted_battle_from_encounter_to_loot() {
    let table = monster_table();
    let database = item_database();

    // Draw order: encounter roll, monster pick, then one draw per attack,
    // and finally the loot roll.
    let mut rng = ScriptedRng::new(vec![
        0.05, // encounter: 0.05 < 0.1, triggered
        0.0,  // monster pick: slime
        0.99, // player attack power: max of range
        0.0,  // monster attack power: min of range
        0.99, // player attack power: max of range
        0.0,  // loot: herb drops
    ]);

    let outcome = check_encounter(&mut rng, &table, None);
    assert!(outcome.triggered);
    let template = outcome.monster.expect("slime template");
    let mut monster = template.spawn();

    // Battle copies, owned by this orchestrator.
    let player_stats = PlayerStats::new_game();
    let mut player = BattleStats::from(&player_stats);

    // Turn 1, player: 10..10 attack vs defense 2 -> 10 - 1 = 9.
    let damage = calculate_damage(&mut rng, player.attack, player.attack, monster.defense);
    assert_eq!(damage, 9);
    monster.hp = monster.hp.saturating_sub(damage);
    assert!(!monster.is_dead());

    // Turn 1, monster: min draw of 3..6 vs defense 5 -> 3 - 2 = 1.
    let damage = calculate_damage(&mut rng, monster.attack_min, monster.attack_max, player.defense);
    assert_eq!(damage, 1);
    player.hp = player.hp.saturating_sub(damage);
    assert_eq!(player.hp, 99);

    // Turn 2, player: 9 more finishes the slime.
    let damage = calculate_damage(&mut rng, player.attack, player.attack, monster.defense);
    monster.hp = monster.hp.saturating_sub(damage);
    assert!(monster.is_dead());

    // Victory: rewards, experience, loot.
    let rewards = calculate_rewards(&template);
    assert_eq!(rewards.exp, 15);
    assert_eq!(rewards.gold, 10);

    let progression = add_experience(&player_stats, rewards.exp);
    assert_eq!(progression.level_ups, 0);
    assert_eq!(progression.stats.exp, 15);

    let loot_table = vec![LootEntry {
        item_id: "herb".into(),
        drop_rate: 0.3,
    }];
    let drops = pd_core::roll_loot(&mut rng, &loot_table, &database);
    assert_eq!(drops.len(), 1);

    let mut inventory: Vec<ItemStack> = Vec::new();
    for drop in &drops {
        let (updated, outcome) = add_item(&inventory, &drop.item, drop.quantity);
        assert!(outcome.success);
        inventory = updated;
    }
    assert_eq!(inventory.len(), 1);
}

#[test]
fn item_turn_heals_through_effect_pipeline() {
    let database = item_database();
    let herb = database.get("herb").unwrap().clone();
    let (inventory, _) = add_item(&[], &herb, 2);

    let mut player = BattleStats::from(&PlayerStats::new_game());
    player.hp = 60;

    let (inventory, used) = use_item(&inventory, "herb");
    assert!(used.success);
    let effect = used.effect.expect("herb carries an effect");
    let applied = apply_effect(effect, player.hp, player.max_hp, player.mp, player.max_mp);
    assert_eq!(applied.hp, 90);
    assert_eq!(applied.message, "Restored 30 HP.");
    assert_eq!(inventory[0].quantity, 1);
}

#[test]
fn escape_failure_still_gives_monster_a_turn() {
    // Orchestrator contract: a failed escape is followed by a monster attack.
    let mut rng = ScriptedRng::new(vec![0.5, 0.0]);
    assert!(!try_escape(&mut rng));

    let mut player_health = Health::new(100).unwrap();
    let damage = calculate_damage(&mut rng, 3, 6, 0);
    let hit = player_health.take_damage(damage);
    assert_eq!(hit.new_health, 97);
}

#[test]
fn seeded_battles_replay_identically() {
    let table = monster_table();
    let run = |seed: u64| {
        let mut rng = GameRng::new(seed);
        let mut log = Vec::new();
        for _ in 0..50 {
            let outcome = check_encounter(&mut rng, &table, Some(&EncounterConfig::default()));
            if let Some(monster) = outcome.monster {
                log.push(calculate_damage(&mut rng, 10, 14, monster.defense));
            }
            log.push(u32::from(rng.chance(0.5)));
        }
        log
    };
    assert_eq!(run(1234), run(1234));
}
