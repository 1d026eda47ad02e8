//! Entity tests: decoded payloads through validation

use super::*;
use crate::decode::{decode_list, decode_single, Record};
use crate::schema::{validate, validate_list, ValidationErrorKind};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

#[test]
fn test_payment_from_xml() {
    let xml = b"<response><payment><date>2024-01-15 10:00:00</date><summ>100</summ></payment></response>";

    let records = decode_list(xml, "payment").unwrap();
    let payments = validate_list::<Payment>(&records).into_strict().unwrap();

    assert_eq!(payments.len(), 1);
    assert_eq!(
        payments[0].date,
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    );
    assert_eq!(payments[0].summ, "100");
    assert_eq!(payments[0].balance, "");
}

#[test]
fn test_payment_requires_date() {
    let err = validate::<Payment>(&Record::from([("summ", "10")])).unwrap_err();
    assert_eq!(err.entity, "Payment");
    assert_eq!(err.kind, ValidationErrorKind::Missing);
}

#[test]
fn test_fee_charge_type_field() {
    let record = Record::from([
        ("date", "2024-03-01 00:00:01"),
        ("summ", "-150"),
        ("balance", "350"),
        ("note", "Monthly fee"),
        ("type", "Fee"),
    ]);

    let fee: FeeCharge = validate(&record).unwrap();
    assert_eq!(fee.kind, "Fee");
    assert_eq!(fee.note, "Monthly fee");

    let json = serde_json::to_value(&fee).unwrap();
    assert_eq!(json["type"], "Fee");
    assert_eq!(json["date"], "2024-03-01T00:00:01");
}

#[test]
fn test_user_info_aliases_and_coercions() {
    let json = br#"{
        "address": "Main st 1",
        "realname": "John Doe",
        "login": "john",
        "cash": "-12.35",
        "ip": "10.0.0.2",
        "phone": "",
        "mobile": "380000000",
        "email": "",
        "credit": "0",
        "creditexpire": "No",
        "payid": "1234567",
        "contract": "42",
        "tariff": "Unlim",
        "tariffalias": "U",
        "tariffnm": "Unlimited",
        "traffdownload": "1 Gb",
        "traffupload": "100 Mb",
        "trafftotal": "1.1 Gb",
        "accountstate": "Active",
        "accountexpire": "",
        "currency": "UAH",
        "version": "1.3.0",
        "futurefield": "ignored"
    }"#;

    let record = decode_single(json, "userdata").unwrap().unwrap();
    let user: UserInfo = validate(&record).unwrap();

    assert_eq!(user.billing_login, "john");
    assert_eq!(user.cash, -12.35);
    assert_eq!(user.pay_id, 1_234_567);
    assert_eq!(user.email, Some(String::new()));
    assert_eq!(user.tariff_name, "Unlimited");
    assert_eq!(user.traffic_total, "1.1 Gb");
    assert_eq!(user.account_state, "Active");
}

#[test]
fn test_user_info_requires_login() {
    let err = validate::<UserInfo>(&Record::from([("realname", "Nobody")])).unwrap_err();
    assert_eq!(err.field, "billing_login");
}

#[test]
fn test_user_info_empty_numbers_default_to_zero() {
    let user: UserInfo =
        validate(&Record::from([("login", "x"), ("cash", ""), ("payid", "")])).unwrap();
    assert_eq!(user.cash, 0.0);
    assert_eq!(user.pay_id, 0);
    assert_eq!(user.email, None);
}

#[test]
fn test_announcement_text_or_message() {
    let xml = br#"<data unic="7" title="Notice"><text>Hello</text></data>"#;
    let record = decode_single(xml, "data").unwrap().unwrap();
    let from_xml: Announcement = validate(&record).unwrap();
    assert_eq!(
        from_xml,
        Announcement {
            text: "Hello".to_string(),
            unic: "7".to_string(),
            title: "Notice".to_string(),
        }
    );

    let legacy: Announcement = validate(&Record::from([
        ("message", "Hello"),
        ("unic", "7"),
        ("title", "Notice"),
    ]))
    .unwrap();
    assert_eq!(legacy, from_xml);
}

#[test]
fn test_ticket_underscore_aliases() {
    let record = Record::from([
        ("_id", "31"),
        ("date", "2024-05-01 12:30:00"),
        ("_from", "john"),
        ("replyid", ""),
        ("status", "1"),
        ("text", "Internet is down"),
    ]);

    let ticket: Ticket = validate(&record).unwrap();
    assert_eq!(ticket.id, 31);
    assert_eq!(ticket.from_user, "john");
    assert_eq!(ticket.to, None);
    assert_eq!(ticket.reply_id, None);
    assert_eq!(ticket.status, 1);
    assert!(!ticket.is_reply());
}

#[test]
fn test_ticket_reply_from_json_list() {
    let json = br#"[
        {"id": "1", "date": "2024-05-01 12:30:00", "from": "john", "to": null, "replyid": null, "status": "0", "text": "Help"},
        {"id": "2", "date": "2024-05-01 13:00:00", "from": "admin", "to": "john", "replyid": "1", "status": "0", "text": "On it"}
    ]"#;

    let records = decode_list(json, "ticket").unwrap();
    let tickets = validate_list::<Ticket>(&records).into_strict().unwrap();

    assert_eq!(tickets.len(), 2);
    assert!(!tickets[0].is_reply());
    assert!(tickets[1].is_reply());
    assert_eq!(tickets[1].to.as_deref(), Some("john"));
}

#[test]
fn test_ticket_create_result() {
    let ok: TicketCreateResult =
        validate(&Record::from([("created", "success"), ("id", "55")])).unwrap();
    assert!(ok.is_success());
    assert_eq!(ok.id, 55);

    let failed: TicketCreateResult = validate(&Record::from([("created", "error")])).unwrap();
    assert!(!failed.is_success());
    assert_eq!(failed.id, 0);
}

#[test]
fn test_payment_systems_from_xml() {
    let xml = b"<paysystems>
  <paysys><name>LiqPay</name><url>https://pay.example/liqpay</url><description>Cards</description></paysys>
  <paysys><name>Portmone</name><url>https://pay.example/portmone</url><description/></paysys>
</paysystems>";

    let records = decode_list(xml, "paysys").unwrap();
    let systems = validate_list::<PaymentSystem>(&records).into_strict().unwrap();

    assert_eq!(systems.len(), 2);
    assert_eq!(systems[1].name, "Portmone");
    assert_eq!(systems[1].description, "");
}

#[test]
fn test_credit_info_optional_integers() {
    let record = Record::from([
        ("status", "1"),
        ("message", "Credit set"),
        ("minday", "1"),
        ("maxday", "5"),
        ("creditterm", ""),
        ("creditprice", "10"),
    ]);

    let credit: CreditInfo = validate(&record).unwrap();
    assert_eq!(credit.status, 1);
    assert_eq!(credit.min_day, Some(1));
    assert_eq!(credit.max_day, Some(5));
    assert_eq!(credit.credit_term, None);
    assert_eq!(credit.credit_price.as_deref(), Some("10"));
    assert_eq!(credit.full_message, None);
}

#[test]
fn test_pay_card_result() {
    let ok: PayCardResult =
        validate(&Record::from([("result", "true"), ("message", "ok")])).unwrap();
    assert!(ok.is_success());

    let bad: PayCardResult = validate(&Record::from([("result", "false")])).unwrap();
    assert!(!bad.is_success());
}

#[test]
fn test_agent_data() {
    let xml = b"<agentdata><id>3</id><contrname>ISP LLC</contrname><bankname>Bank</bankname></agentdata>";
    let record = decode_single(xml, "agentdata").unwrap().unwrap();

    let agent: AgentData = validate(&record).unwrap();
    assert_eq!(agent.id, 3);
    assert_eq!(agent.contrname, "ISP LLC");
    assert_eq!(agent.siteurl, "");
}

#[test]
fn test_tariff_vservices_mixed_list() {
    let json = br#"[
        {"tariffname": "Unlim", "tariffprice": "200", "tariffdaysperiod": "30"},
        {"vsrvname": "Static IP", "vsrvprice": "50", "vsrvdaysperiod": "30"}
    ]"#;

    let records = decode_list(json, "tariffvservices").unwrap();
    let items = validate_list::<TariffVService>(&records).into_strict().unwrap();

    assert!(items[0].is_tariff());
    assert_eq!(items[0].tariff_price.as_deref(), Some("200"));
    assert!(!items[1].is_tariff());
    assert_eq!(items[1].vservice_name.as_deref(), Some("Static IP"));
}

#[test]
fn test_allowed_tariffs() {
    let records = decode_list(
        br#"[{"tariff": "Basic"}, {"tariff": "Pro"}]"#,
        "tarifftoswitchallowed",
    )
    .unwrap();
    let tariffs = validate_list::<AllowedTariff>(&records).into_strict().unwrap();
    let names: Vec<_> = tariffs.iter().map(|t| t.tariff.as_str()).collect();
    assert_eq!(names, vec!["Basic", "Pro"]);
}

#[test]
fn test_freeze_data_flags() {
    let json = br#"{
        "result": "",
        "freezeSelfAvailable": true,
        "tariffAllowedAny": "0",
        "negativeBalanceFreezeAllowed": false,
        "freezeStatus": "Not frozen",
        "freezeDaysChargeActive": "1",
        "freezeDaysAvailable": "30"
    }"#;

    let record = decode_single(json, "freezedata").unwrap().unwrap();
    let data: FreezeData = validate(&record).unwrap();

    assert_eq!(data.freeze_self_available, Some(true));
    assert_eq!(data.tariff_allowed_any, Some(false));
    assert_eq!(data.negative_balance_freeze_allowed, Some(false));
    assert_eq!(data.freeze_days_charge_active, Some(true));
    assert_eq!(data.freeze_status.as_deref(), Some("Not frozen"));
    assert_eq!(data.freeze_days_available.as_deref(), Some("30"));
    assert_eq!(data.date_from, None);
}

#[test]
fn test_freeze_result() {
    let ok: FreezeResult = validate(&Record::from([("result", "Success")])).unwrap();
    assert!(ok.is_success());

    let denied: FreezeResult = validate(&Record::from([
        ("result", "Error"),
        ("message", "Not allowed"),
    ]))
    .unwrap();
    assert!(!denied.is_success());
}

#[test]
fn test_signup_form_body() {
    let form = SignupForm {
        date: "2024-03-01 10:00:00".to_string(),
        ip: "10.0.0.1".to_string(),
        street: "Kyiv, Khreshchatyk".to_string(),
        build: "1".to_string(),
        apt: "12".to_string(),
        realname: "John Doe".to_string(),
        phone: "+380501234567".to_string(),
        notes: String::new(),
    };

    let body = form.to_body();
    assert_eq!(body["state"], 0);
    assert_eq!(body["service"], "Internet");
    assert_eq!(body["realname"], "John Doe");
    assert_eq!(body["notes"], "");
}
