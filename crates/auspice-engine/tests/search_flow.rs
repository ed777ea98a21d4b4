//! End-to-end flow: JSON-shaped lookup tables and stone records in,
//! annotated matches out.

use auspice_engine::catalog::{Stone, StoneRecord};
use auspice_engine::matcher::{search_by_birth_date, search_by_conditions, AxisQuery};
use auspice_engine::refdata::ReferenceData;

fn reference_data() -> ReferenceData {
    serde_json::from_str(
        r##"{
        "days": [
            {"id": 1, "name": "อาทิตย์", "lucky_color": "แดง", "unlucky_color": "ฟ้า"},
            {"id": 3, "name": "อังคาร", "lucky_color": "ชมพู, ดำ", "unlucky_color": "ขาว, เหลืองนวล"},
            {"id": 4, "name": "พุธกลางวัน", "lucky_color": "เขียว", "unlucky_color": "ชมพู"},
            {"id": 5, "name": "พุธกลางคืน", "lucky_color": "เทา", "unlucky_color": "ส้ม"}
        ],
        "colors": [
            {"id": 1, "name": "แดง", "hex": "#D32F2F"},
            {"id": 2, "name": "ชมพู"},
            {"id": 3, "name": "เขียว"},
            {"id": 5, "name": "เหลืองนวล"},
            {"id": 7, "name": "เทา"},
            {"id": 9, "name": "ขาว"},
            {"id": 10, "name": "ดำ"}
        ],
        "signs": [
            {"id": 5, "name": "สิงห์", "start_month": 8, "start_day": 17, "end_month": 9, "end_day": 16},
            {"id": 9, "name": "ธนู", "start_month": 12, "start_day": 16, "end_month": 1, "end_day": 14}
        ],
        "groups": [
            {"id": 1, "name": "ควอตซ์"}
        ]
    }"##,
    )
    .unwrap()
}

fn catalog() -> Vec<Stone> {
    let records: Vec<StoneRecord> = serde_json::from_str(
        r#"[
        {
            "id": 1,
            "thai_name": "อาเกต",
            "english_name": "Agate",
            "group_ids": "1",
            "color_ids": "1 2 3 9 10",
            "good_days": "3 6",
            "good_months": "8 9",
            "good_zodiac_animals": "4 12",
            "good_zodiac_signs": "5"
        },
        {
            "id": 2,
            "thai_name": "มูนสโตน",
            "english_name": "Moonstone",
            "group_ids": "1",
            "color_ids": "9",
            "good_days": "5",
            "good_months": "8",
            "good_zodiac_animals": "4",
            "good_zodiac_signs": "5"
        },
        {
            "id": 3,
            "thai_name": "ทับทิม",
            "english_name": "Ruby",
            "color_ids": "1",
            "good_days": "1",
            "good_months": "7",
            "good_zodiac_animals": "5",
            "good_zodiac_signs": "4"
        }
    ]"#,
    )
    .unwrap();
    records.into_iter().map(Stone::from).collect()
}

#[test]
fn birth_date_search_filters_and_annotates() {
    // 25/08/2530 = Tuesday 1987-08-25: day 3, month 8, animal 4, sign 5
    let result = search_by_birth_date(&catalog(), "25/08/2530", &reference_data()).unwrap();

    assert_eq!(result.auspice.date_iso, "1987-08-25");
    assert_eq!(result.auspice.ids.day_id, 3);
    assert_eq!(result.auspice.ids.month_id, 8);
    assert_eq!(result.auspice.ids.animal_id, 4);
    assert_eq!(result.auspice.ids.sign_id, 5);

    // Agate matches every axis and carries a Tuesday lucky color (ชมพู);
    // Moonstone fails the day axis; Ruby fails everything
    assert_eq!(result.stones.len(), 1);
    let agate = &result.stones[0];
    assert_eq!(agate.stone.english_name, "Agate");

    // Agate also carries ขาว (9), unlucky on a Tuesday
    assert!(agate.is_unlucky);
    assert_eq!(agate.unlucky_note, "ขาว");
    assert_eq!(result.unlucky_count, 1);
}

#[test]
fn wednesday_birth_date_includes_night_tagged_stones() {
    // 26/08/2530 = Wednesday 1987-08-26, derived as daytime (id 4).
    // Moonstone is tagged nighttime-only (5) and must still match, but the
    // gate uses the daytime rule's lucky colors, which Moonstone (ขาว) lacks.
    let mut data = reference_data();
    data.days[2].lucky_color = "ขาว".to_string();

    let result = search_by_birth_date(&catalog(), "26/08/2530", &data).unwrap();
    assert_eq!(result.auspice.ids.day_id, 4);
    let names: Vec<&str> = result
        .stones
        .iter()
        .map(|m| m.stone.english_name.as_str())
        .collect();
    assert_eq!(names, vec!["Moonstone"]);
}

#[test]
fn condition_search_by_group_only() {
    let query = AxisQuery {
        group_id: 1,
        ..Default::default()
    };
    let result = search_by_conditions(&catalog(), &query, &reference_data());
    let names: Vec<&str> = result
        .iter()
        .map(|m| m.stone.english_name.as_str())
        .collect();
    assert_eq!(names, vec!["Agate", "Moonstone"]);
    assert!(result.iter().all(|m| !m.is_unlucky));
}

#[test]
fn invalid_date_is_a_value_not_a_panic() {
    let err = search_by_birth_date(&catalog(), "99/99/9999", &reference_data()).unwrap_err();
    assert!(err.to_string().contains("Invalid date"));
}
