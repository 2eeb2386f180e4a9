mod common;

use common::{fixture, fixture_json};
use serde_json::{Value, json};
use yuidoc_jsonapi::{
    ConvertOptions, Document, Linkage, MemberStyle, Resource, ResourceType, YuiDoc, convert,
    convert_with,
};

fn find<'a>(document: &'a Document, kind: ResourceType, id: &str) -> &'a Resource {
    document
        .find(kind, id)
        .unwrap_or_else(|| panic!("missing {kind} {id:?}"))
}

fn to_one<'a>(resource: &'a Resource, name: &str) -> Option<&'a Linkage> {
    resource.relationship(name).and_then(|r| r.one())
}

fn to_many<'a>(resource: &'a Resource, name: &str) -> Vec<&'a str> {
    resource
        .relationship(name)
        .map(|r| r.many().iter().map(|l| l.id.as_str()).collect())
        .unwrap_or_default()
}

fn embedded() -> ConvertOptions {
    ConvertOptions::with_members(MemberStyle::Embedded)
}

#[test]
fn resource_count_matches_input() {
    let doc = fixture();
    let members = doc
        .classitems
        .iter()
        .filter(|item| item.item_type().is_some())
        .count();

    let linked = convert(&doc);
    assert_eq!(
        linked.data.len(),
        doc.classes.len() + doc.modules.len() + members
    );
    assert_eq!(
        linked.summary().to_string(),
        "5 classes, 2 modules, 5 methods, 4 properties, 2 events"
    );

    let embedded = convert_with(&doc, &embedded());
    assert_eq!(embedded.data.len(), doc.classes.len() + doc.modules.len());
}

#[test]
fn resources_are_ordered_by_pass() {
    let document = convert(&fixture());
    let kinds: Vec<ResourceType> = document.data.iter().map(|r| r.kind).collect();
    let mut sorted = kinds.clone();
    sorted.sort_by_key(|kind| match kind {
        ResourceType::Class => 0,
        ResourceType::Module => 1,
        ResourceType::Method => 2,
        ResourceType::Property => 3,
        ResourceType::Event => 4,
    });
    assert_eq!(kinds, sorted);

    let classes: Vec<&str> = document
        .resources_of(ResourceType::Class)
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(
        classes,
        [
            "DS.Adapter",
            "DS.RESTAdapter",
            "DS.JSONAPIAdapter",
            "DS.Model",
            "DS.Transform"
        ]
    );
}

#[test]
fn class_attributes_are_copied() {
    let doc = fixture();
    let document = convert(&doc);

    for class in doc.classes.values() {
        let resource = find(&document, ResourceType::Class, &class.name);
        assert_eq!(resource.attribute("name"), Some(&json!(class.name)));
        assert_eq!(
            resource.attribute("shortname"),
            class.shortname.as_ref().map(|s| json!(s)).as_ref()
        );
        assert_eq!(resource.attribute("file"), class.file.as_ref().map(|s| json!(s)).as_ref());
        assert_eq!(resource.attribute("line"), class.line.map(|l| json!(l)).as_ref());
        assert_eq!(
            resource.attribute("description"),
            class.description.as_ref().map(|s| json!(s)).as_ref()
        );
        assert!(resource.attribute("namespace").is_none());
        assert!(resource.attribute("extends").is_none());
    }
}

#[test]
fn parent_class_and_descendants_are_linked() {
    let doc = fixture();
    let document = convert(&doc);

    for class in doc.classes.values() {
        let resource = find(&document, ResourceType::Class, &class.name);
        match class.parent() {
            Some(parent) => {
                assert_eq!(
                    to_one(resource, "parentClass"),
                    Some(&Linkage::new(ResourceType::Class, parent))
                );
                if let Some(parent) = document.find(ResourceType::Class, parent) {
                    assert!(to_many(parent, "descendants").contains(&class.name.as_str()));
                }
            }
            None => assert_eq!(to_one(resource, "parentClass"), None),
        }
    }

    let adapter = find(&document, ResourceType::Class, "DS.Adapter");
    assert_eq!(to_many(adapter, "descendants"), ["DS.RESTAdapter"]);
    let transform = find(&document, ResourceType::Class, "DS.Transform");
    assert!(to_many(transform, "descendants").is_empty());
}

#[test]
fn class_module_is_linked() {
    let document = convert(&fixture());

    let model = find(&document, ResourceType::Class, "DS.Model");
    assert_eq!(
        to_one(model, "module"),
        Some(&Linkage::new(ResourceType::Module, "ember-data"))
    );
    let transform = find(&document, ResourceType::Class, "DS.Transform");
    assert_eq!(to_one(transform, "module"), None);
}

#[test]
fn module_classes_follow_mapping_keys() {
    let doc = fixture();
    let document = convert(&doc);

    for module in doc.modules.values() {
        let resource = find(&document, ResourceType::Module, &module.name);
        let expected: Vec<&str> = module.class_names().collect();
        assert_eq!(to_many(resource, "classes"), expected);
        assert_eq!(resource.attribute("tag"), module.tag.as_ref().map(|t| json!(t)).as_ref());
        assert_eq!(
            resource.attribute("itemtype"),
            module.itemtype.as_ref().map(|t| json!(t)).as_ref()
        );
    }

    let serializers = find(&document, ResourceType::Module, "ember-data-serializers");
    assert!(to_many(serializers, "classes").is_empty());
    assert!(serializers.attribute("submodules").is_none());
}

#[test]
fn linked_members_appear_in_their_class() {
    let doc = fixture();
    let document = convert(&doc);

    for item in &doc.classitems {
        let (Some(kind), Some(class)) = (item.item_type(), item.class()) else {
            continue;
        };
        let name = item.name().unwrap();
        let id = format!("{class}#{name}");
        let collection = match kind.as_str() {
            "method" => "methods",
            "property" => "properties",
            _ => "events",
        };

        let owner = find(&document, ResourceType::Class, class);
        assert!(
            to_many(owner, collection).contains(&id.as_str()),
            "{id} missing from {class}.{collection}"
        );

        let member = document
            .data
            .iter()
            .find(|r| r.id == id && r.kind.as_str() == kind.as_str())
            .unwrap();
        assert_eq!(
            to_one(member, "class"),
            Some(&Linkage::new(ResourceType::Class, class))
        );
    }
}

#[test]
fn member_attributes_keep_source_fields() {
    let document = convert(&fixture());

    let handle_response = find(&document, ResourceType::Method, "DS.RESTAdapter#handleResponse");
    assert_eq!(handle_response.attribute("access"), Some(&json!("private")));
    assert_eq!(handle_response.attribute("tagname"), Some(&json!("")));
    assert_eq!(
        handle_response.attribute("return"),
        Some(&json!({"description": "response", "type": "Object | DS.AdapterError"}))
    );
    assert!(handle_response.attribute("class").is_none());
    assert!(handle_response.attribute("module").is_none());

    let is_empty = find(&document, ResourceType::Property, "DS.Model#isEmpty");
    assert_eq!(is_empty.attribute("type"), Some(&json!("{Boolean}")));
    assert_eq!(is_empty.attribute("readOnly"), Some(&json!("")));
}

#[test]
fn member_without_class_is_standalone() {
    let document = convert(&fixture());

    let version = find(&document, ResourceType::Property, "#VERSION");
    assert_eq!(to_one(version, "class"), None);
    assert_eq!(version.attribute("name"), Some(&json!("VERSION")));
}

#[test]
fn embedded_members_are_verbatim() {
    let raw = fixture_json();
    let document = convert_with(&fixture(), &embedded());

    for resource in document.resources_of(ResourceType::Class) {
        for (itemtype, collection) in [
            ("method", "methods"),
            ("property", "properties"),
            ("event", "events"),
        ] {
            let expected: Vec<Value> = raw["classitems"]
                .as_array()
                .unwrap()
                .iter()
                .filter(|item| {
                    item["itemtype"] == itemtype && item["class"] == resource.id.as_str()
                })
                .cloned()
                .collect();
            assert_eq!(resource.attribute(collection), Some(&Value::Array(expected)));
            assert!(resource.relationship(collection).is_none());
        }
    }
}

#[test]
fn conversion_is_idempotent() {
    let doc = fixture();
    let before = doc.clone();

    assert_eq!(convert(&doc), convert(&doc));
    assert_eq!(
        convert_with(&doc, &embedded()),
        convert_with(&doc, &embedded())
    );
    assert_eq!(doc, before);
}

#[test]
fn dangling_references_pass_through() {
    let doc: YuiDoc = serde_json::from_value(json!({
        "classes": {"Child": {"name": "Child", "extends": "Missing", "module": "nowhere"}}
    }))
    .unwrap();

    let document = convert(&doc);
    let child = find(&document, ResourceType::Class, "Child");
    assert_eq!(
        to_one(child, "parentClass"),
        Some(&Linkage::new(ResourceType::Class, "Missing"))
    );
    assert_eq!(
        to_one(child, "module"),
        Some(&Linkage::new(ResourceType::Module, "nowhere"))
    );
    assert_eq!(document.data.len(), 1);
}

#[test]
fn null_valued_fields_are_preserved() {
    let doc: YuiDoc = serde_json::from_value(json!({
        "classes": {"A": {"name": "A"}},
        "modules": {"M": {"name": "M", "classes": null}},
        "classitems": [
            {"itemtype": "method", "name": "x", "class": "A", "description": null, "return": null}
        ]
    }))
    .unwrap();

    let embedded = convert_with(&doc, &embedded());
    let class = find(&embedded, ResourceType::Class, "A");
    assert_eq!(
        class.attribute("methods"),
        Some(&json!([
            {"itemtype": "method", "name": "x", "class": "A", "description": null, "return": null}
        ]))
    );

    let linked = convert(&doc);
    let method = find(&linked, ResourceType::Method, "A#x");
    assert_eq!(method.attribute("description"), Some(&Value::Null));
    assert_eq!(method.attribute("return"), Some(&Value::Null));
    let module = find(&linked, ResourceType::Module, "M");
    assert!(to_many(module, "classes").is_empty());
}

#[test]
fn empty_document() {
    let document = convert(&YuiDoc::default());
    assert_eq!(serde_json::to_value(&document).unwrap(), json!({"data": []}));
}

#[test]
fn parent_and_module_example() {
    let doc: YuiDoc = serde_json::from_value(json!({
        "classes": {
            "A": {"name": "A"},
            "B": {"name": "B", "extends": "A"}
        },
        "modules": {
            "M": {"name": "M", "classes": {"A": {}, "B": {}}}
        },
        "classitems": [
            {"itemtype": "method", "name": "run", "class": "B", "line": 3}
        ]
    }))
    .unwrap();

    insta::assert_json_snapshot!(convert(&doc), @r#"
    {
      "data": [
        {
          "id": "A",
          "type": "class",
          "attributes": {
            "name": "A"
          },
          "relationships": {
            "parentClass": {
              "data": null
            },
            "descendants": {
              "data": [
                {
                  "id": "B",
                  "type": "class"
                }
              ]
            },
            "module": {
              "data": null
            },
            "methods": {
              "data": []
            },
            "properties": {
              "data": []
            },
            "events": {
              "data": []
            }
          }
        },
        {
          "id": "B",
          "type": "class",
          "attributes": {
            "name": "B"
          },
          "relationships": {
            "parentClass": {
              "data": {
                "id": "A",
                "type": "class"
              }
            },
            "descendants": {
              "data": []
            },
            "module": {
              "data": null
            },
            "methods": {
              "data": [
                {
                  "id": "B#run",
                  "type": "method"
                }
              ]
            },
            "properties": {
              "data": []
            },
            "events": {
              "data": []
            }
          }
        },
        {
          "id": "M",
          "type": "module",
          "attributes": {},
          "relationships": {
            "classes": {
              "data": [
                {
                  "id": "A",
                  "type": "class"
                },
                {
                  "id": "B",
                  "type": "class"
                }
              ]
            }
          }
        },
        {
          "id": "B#run",
          "type": "method",
          "attributes": {
            "itemtype": "method",
            "name": "run",
            "line": 3
          },
          "relationships": {
            "class": {
              "data": {
                "id": "B",
                "type": "class"
              }
            }
          }
        }
      ]
    }
    "#);
}
