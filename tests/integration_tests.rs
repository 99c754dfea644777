//! Integration tests for cue list reporting

mod common;

use common::{load_fixture, report_for_fixture, report_for_xml};
use cuelist::report::ReportMode;

#[test]
fn test_numeric_report() {
    let report = report_for_fixture("Rehearsal", ReportMode::Numeric);

    let expected = "\
1 | House to half, Mics On: none
2 | Narrator enters, Mics On: [3, 10]
2.5 | Narrator exits, Mics On: none
3 | Rock & roll number, Mics On: [7]
4 | Bows, Mics On: none
";

    assert_eq!(report, expected);
}

#[test]
fn test_raw_report() {
    let report = report_for_fixture("Rehearsal", ReportMode::Raw);

    let expected = r#"Q: 1, Description: House to half, Mics On: []
Q: 2, Description: Narrator enters, Mics On: ["Mic3", "Mic10"]
Q: 2.5, Description: Narrator exits, Mics On: []
Q: 3, Description: Rock & roll number, Mics On: ["Mic7", "Mic", "MicXY", "Speaker1"]
Q: 4, Description: Bows, Mics On: ["Speaker1"]
"#;

    assert_eq!(report, expected);
}

#[test]
fn test_one_line_per_cue_in_both_modes() {
    let production = load_fixture("Rehearsal");
    let cue_count = production.cues().len();
    assert_eq!(cue_count, 5);

    for mode in [ReportMode::Numeric, ReportMode::Raw] {
        let report = report_for_fixture("Rehearsal", mode);
        assert_eq!(report.lines().count(), cue_count);
    }
}

#[test]
fn test_cue_fields_survive_parse() {
    let production = load_fixture("Rehearsal");
    let cue = &production.cues()[2];

    assert_eq!(cue.uid, "2c8e3f51");
    assert_eq!(cue.kind, 1);
    assert_eq!(cue.enabled, 0);
    assert_eq!(cue.q, "2.5");
    assert_eq!(cue.msgs.len(), 2);
    assert!(cue.msgs.iter().all(|m| !m.is_on()));
}

#[test]
fn test_off_messages_never_listed() {
    let xml = r#"<Production><CueList>
  <Cue>
    <Q>10</Q>
    <Description>Mixed</Description>
    <Msg Name="Mic1" Data2="0" />
    <Msg Name="Mic2" Data2="1" />
    <Msg Name="Mic3" Data2="127" />
  </Cue>
</CueList></Production>"#;

    assert_eq!(
        report_for_xml(xml, ReportMode::Numeric),
        "10 | Mixed, Mics On: [2]\n"
    );
    assert_eq!(
        report_for_xml(xml, ReportMode::Raw),
        "Q: 10, Description: Mixed, Mics On: [\"Mic2\"]\n"
    );
}

#[test]
fn test_entities_decoded_verbatim() {
    let xml = r#"<Production><CueList>
  <Cue>
    <Q>A&lt;1&gt;</Q>
    <Description>Tom &quot;Big&quot; Jones, stage left</Description>
    <Msg Name="Mic12" Data2="1" />
  </Cue>
</CueList></Production>"#;

    assert_eq!(
        report_for_xml(xml, ReportMode::Numeric),
        "A<1> | Tom \"Big\" Jones, stage left, Mics On: [12]\n"
    );
}

#[test]
fn test_surrounding_whitespace_kept_in_report() {
    let xml = "<Production><CueList><Cue>\
<Q> 1A </Q><Description>  Lights up \n</Description>\
<Msg Name=\"Mic3\" Data2=\"1\"/>\
</Cue></CueList></Production>";

    assert_eq!(
        report_for_xml(xml, ReportMode::Numeric),
        " 1A  |   Lights up \n, Mics On: [3]\n"
    );
}

#[test]
fn test_loose_documents_still_report() {
    let xml = r#"<Production>
  <CueList>
    <Cue>
      <Q>1</Q>
      <Q>2</Q>
      <Description>a<b/>c</Description>
      <Msg Name="Mic4" Data2="1" />
    </Cue>
  </CueList>
  <CueList>
    <Cue><Q>3</Q><Description>Encore</Description></Cue>
  </CueList>
</Production>"#;

    let expected = "\
2 | ac, Mics On: [4]
3 | Encore, Mics On: none
";
    assert_eq!(report_for_xml(xml, ReportMode::Numeric), expected);
}
