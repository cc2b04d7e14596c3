//! End-to-end facility scenarios: layout, residents, visits, ticket sales.

use zoo_core::cash::Denomination::*;
use zoo_core::{
    AdmissionCode, Animal, AnimalKind, Area, AreaId, CashCount, CoreError, Money, PaymentStatus,
    RefundReason, ShortChangePolicy, Zoo,
};

/// Entrance → savannah → picnic → reef → entrance, plus an aviary nobody
/// can walk to.
fn small_zoo() -> (Zoo, [AreaId; 4]) {
    let mut zoo = Zoo::new();
    let savannah = zoo.add_area(Area::enclosure(3)).unwrap();
    let picnic = zoo.add_area(Area::PicnicArea).unwrap();
    let reef = zoo.add_area(Area::aquarium(4)).unwrap();
    let aviary = zoo.add_area(Area::cage(2)).unwrap();

    zoo.connect_areas(AreaId::ENTRANCE, savannah).unwrap();
    zoo.connect_areas(savannah, picnic).unwrap();
    zoo.connect_areas(picnic, reef).unwrap();
    zoo.connect_areas(reef, AreaId::ENTRANCE).unwrap();
    zoo.connect_areas(aviary, picnic).unwrap();

    (zoo, [savannah, picnic, reef, aviary])
}

#[test]
fn layout_and_reachability() {
    let (mut zoo, [savannah, picnic, reef, aviary]) = small_zoo();

    assert_eq!(zoo.find_unreachable_areas(), vec![aviary]);
    assert!(zoo.is_path_allowed(&[AreaId::ENTRANCE, savannah, picnic, reef, AreaId::ENTRANCE]));
    assert!(!zoo.is_path_allowed(&[AreaId::ENTRANCE, picnic]));

    zoo.connect_areas(reef, aviary).unwrap();
    assert!(zoo.find_unreachable_areas().is_empty());

    zoo.remove_area(picnic).unwrap();
    let mut unreachable = zoo.find_unreachable_areas();
    unreachable.sort();
    assert_eq!(unreachable, vec![reef, aviary]);
}

#[test]
fn entrance_is_permanent_and_unique() {
    let (mut zoo, _) = small_zoo();
    let before = zoo.graph().len();

    assert_eq!(zoo.add_area(Area::Entrance).unwrap(), AreaId::ENTRANCE);
    assert_eq!(zoo.remove_area(AreaId::ENTRANCE), Err(CoreError::CannotRemoveOrigin));
    assert_eq!(zoo.graph().len(), before);

    // No id was spent on the refused entrance.
    assert_eq!(zoo.add_area(Area::PicnicArea).unwrap(), AreaId::new(5));
}

#[test]
fn residents_and_a_full_visit() {
    let (mut zoo, [savannah, picnic, reef, aviary]) = small_zoo();

    let admitted = [
        (savannah, Animal::new(AnimalKind::Zebra, "Marty")),
        (savannah, Animal::new(AnimalKind::Gazelle, "Gigi")),
        (reef, Animal::new(AnimalKind::Starfish, "Patrick")),
        (reef, Animal::new(AnimalKind::Seal, "Sammy")),
        (aviary, Animal::new(AnimalKind::Buzzard, "Buzz")),
    ];
    for (area, animal) in admitted {
        assert_eq!(zoo.add_animal(area, animal), AdmissionCode::AnimalAdded);
    }

    assert_eq!(
        zoo.add_animal(savannah, Animal::new(AnimalKind::Lion, "Alex")),
        AdmissionCode::IncompatibleInhabitants
    );
    assert_eq!(
        zoo.add_animal(reef, Animal::new(AnimalKind::Shark, "Bruce")),
        AdmissionCode::IncompatibleInhabitants
    );
    assert_eq!(
        zoo.add_animal(picnic, Animal::new(AnimalKind::Parrot, "Polly")),
        AdmissionCode::NotAHabitat
    );
    assert_eq!(
        zoo.add_animal(aviary, Animal::new(AnimalKind::Seal, "Stray")),
        AdmissionCode::WrongHabitat
    );

    let seen = zoo
        .visit(&[AreaId::ENTRANCE, savannah, picnic, reef, AreaId::ENTRANCE])
        .unwrap();
    assert_eq!(seen, vec!["Marty", "Gigi", "Patrick", "Sammy"]);

    assert!(matches!(
        zoo.visit(&[AreaId::ENTRANCE, aviary]),
        Err(CoreError::InvalidPath(_))
    ));
}

#[test]
fn ticket_sales_over_a_day() {
    let mut zoo = Zoo::new();
    zoo.set_entrance_fee(17, 50).unwrap();
    zoo.set_cash_supply(
        CashCount::new()
            .with(Note10, 1)
            .with(Coin2, 1)
            .with(Coin50p, 1),
    );

    // First visitor: £20, gets £2.50 back.
    let receipt = zoo.process_payment(CashCount::new().with(Note20, 1));
    assert_eq!(receipt.status, PaymentStatus::ChangeGiven);
    assert_eq!(receipt.returned, CashCount::new().with(Coin2, 1).with(Coin50p, 1));

    // Second visitor: same again, but the 50p is gone.
    let before = zoo.cash_supply();
    let receipt = zoo.process_payment(CashCount::new().with(Note20, 1));
    assert_eq!(
        receipt.status,
        PaymentStatus::Refunded {
            reason: RefundReason::ChangeUnavailable
        }
    );
    assert_eq!(zoo.cash_supply(), before);

    // Third visitor pays exactly.
    let exact = CashCount::new()
        .with(Note10, 1)
        .with(Note5, 1)
        .with(Coin2, 1)
        .with(Coin50p, 1);
    let receipt = zoo.process_payment(exact);
    assert_eq!(receipt.status, PaymentStatus::Exact);
    assert!(receipt.returned.is_empty());

    // Fourth visitor underpays.
    let short = CashCount::new().with(Note10, 1);
    let receipt = zoo.process_payment(short);
    assert_eq!(receipt.returned, short);
    assert!(!receipt.status.is_accepted());

    // The till holds its float plus the two sales.
    assert_eq!(
        zoo.cash_supply().total_value(),
        Money::from_pence(1250 + 1750 + 1750)
    );
}

#[test]
fn short_change_under_each_policy() {
    let stock = CashCount::new().with(Note10, 1).with(Coin2, 1);
    let inserted = CashCount::new().with(Note20, 1);

    let mut refunding = Zoo::new();
    refunding.set_entrance_fee(17, 50).unwrap();
    refunding.set_cash_supply(stock);
    assert_eq!(refunding.pay_entrance_fee(inserted), inserted);
    assert_eq!(refunding.cash_supply(), stock);

    let mut accepting = Zoo::new();
    accepting.set_short_change_policy(ShortChangePolicy::AcceptShortfall);
    accepting.set_entrance_fee(17, 50).unwrap();
    accepting.set_cash_supply(stock);
    let change = accepting.pay_entrance_fee(inserted);
    assert_eq!(change, CashCount::new().with(Coin2, 1));
    assert!(change.total_value() <= Money::from_pence(250));
    assert_eq!(accepting.cash_supply().get(Note20), 1);
}

#[test]
fn overpayment_change_never_exceeds_difference() {
    let fee = Money::from_pounds_pence(3, 70);
    let stock = zoo_core::Denomination::ALL
        .into_iter()
        .fold(CashCount::new(), |cash, d| cash.with(d, 2));

    for note in [Note5, Note10, Note20] {
        let mut zoo = Zoo::new();
        zoo.set_entrance_fee(3, 70).unwrap();
        zoo.set_cash_supply(stock);
        let inserted = CashCount::new().with(note, 1);

        let receipt = zoo.process_payment(inserted);

        let difference = inserted.total_value() - fee;
        assert_eq!(receipt.status, PaymentStatus::ChangeGiven);
        assert_eq!(receipt.returned.total_value(), difference);
        assert_eq!(
            zoo.cash_supply().total_value(),
            stock.total_value() + fee
        );
    }
}
