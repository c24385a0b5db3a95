use super::*;
use std::collections::BTreeMap;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    let mut out = BTreeMap::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                out.insert(path.clone(), Vec::new());
                stack.push(path);
            } else {
                out.insert(path.clone(), fs::read(&path).unwrap());
            }
        }
    }
    out
}

fn targets(plan: &Plan) -> Vec<String> {
    plan.actions
        .iter()
        .map(|a| a.target.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_empty_vite_project_full_plan() {
    let dir = TempDir::new().unwrap();
    let plan = build_plan(dir.path(), FrameworkKind::Vite, false);

    let tailwind = plan.find(TAILWIND_CONFIG).unwrap();
    assert_eq!(tailwind.verb, ActionVerb::Create);
    assert_eq!(tailwind.step, StepName::TailwindConfig);

    // nothing to delete in an empty project
    assert!(plan.actions.iter().all(|a| a.verb != ActionVerb::Delete));

    assert_eq!(plan.find("src/layouts").unwrap().verb, ActionVerb::Create);
    assert_eq!(plan.find("src/pages").unwrap().verb, ActionVerb::Create);
    assert_eq!(plan.find("src/main.tsx").unwrap().verb, ActionVerb::Overwrite);

    assert_eq!(plan.find(JSCONFIG).unwrap().verb, ActionVerb::Create);
    assert_eq!(plan.find(COMPONENTS_JSON).unwrap().verb, ActionVerb::Create);
    assert_eq!(plan.find("src/lib/utils.ts").unwrap().verb, ActionVerb::Create);
}

#[test]
fn test_restructure_actions_in_order() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/App.tsx", "app");
    write(dir.path(), "src/App.css", "css");

    let plan = build_plan(dir.path(), FrameworkKind::Vite, false);
    let restructure: Vec<String> = plan
        .actions_for(StepName::RestructureSrc)
        .map(|a| a.target.to_string_lossy().into_owned())
        .collect();

    assert_eq!(
        restructure,
        vec![
            "src/App.tsx",
            "src/App.css",
            "src/layouts",
            "src/layouts/MainLayout.tsx",
            "src/pages",
            "src/pages/HomePage.tsx",
            "src/main.tsx",
        ]
    );
    assert_eq!(plan.find("src/App.tsx").unwrap().payload, ActionPayload::Remove);
}

#[test]
fn test_build_plan_never_touches_filesystem() {
    for framework in [
        FrameworkKind::Vite,
        FrameworkKind::NextJS,
        FrameworkKind::CreateReactApp,
        FrameworkKind::Unknown,
    ] {
        for safe_mode in [false, true] {
            let dir = TempDir::new().unwrap();
            write(dir.path(), "src/App.tsx", "app");
            write(dir.path(), "tsconfig.json", "{ \"compilerOptions\": {} }");
            write(dir.path(), "tailwind.config.js", "old");

            let before = snapshot(dir.path());
            let _ = build_plan(dir.path(), framework, safe_mode);
            assert_eq!(before, snapshot(dir.path()));
        }
    }
}

#[test]
fn test_safe_mode_skips_existing_tailwind_config() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), TAILWIND_CONFIG, "module.exports = {}");

    let safe = build_plan(dir.path(), FrameworkKind::Vite, true);
    assert!(safe.find(TAILWIND_CONFIG).is_none());

    let unsafe_plan = build_plan(dir.path(), FrameworkKind::Vite, false);
    assert_eq!(
        unsafe_plan.find(TAILWIND_CONFIG).unwrap().verb,
        ActionVerb::Overwrite
    );
}

#[test]
fn test_missing_tailwind_config_is_created_in_both_modes() {
    let dir = TempDir::new().unwrap();
    for safe_mode in [false, true] {
        let plan = build_plan(dir.path(), FrameworkKind::CreateReactApp, safe_mode);
        assert_eq!(plan.find(TAILWIND_CONFIG).unwrap().verb, ActionVerb::Create);
    }
}

#[test]
fn test_safe_mode_has_no_restructure() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/App.tsx", "app");
    write(dir.path(), "src/App.css", "css");

    let plan = build_plan(dir.path(), FrameworkKind::Vite, true);
    assert_eq!(plan.actions_for(StepName::RestructureSrc).count(), 0);
    let names = targets(&plan);
    for forbidden in ["src/layouts", "src/pages", "src/main.tsx", "src/App.tsx"] {
        assert!(!names.iter().any(|t| t == forbidden), "{forbidden} planned");
    }
    assert!(plan.actions.iter().all(|a| a.verb != ActionVerb::Delete));
}

#[test]
fn test_stylesheet_with_directives_is_left_alone() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "src/index.css",
        "@tailwind base;\n@tailwind components;\n@tailwind utilities;\nbody {}\n",
    );

    let plan = build_plan(dir.path(), FrameworkKind::Vite, false);
    assert!(plan.find("src/index.css").is_none());
}

#[test]
fn test_stylesheet_without_directives_gets_prepend() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "app/globals.css", "body { margin: 0; }\n");

    for safe_mode in [false, true] {
        let plan = build_plan(dir.path(), FrameworkKind::NextJS, safe_mode);
        let css = plan.find("app/globals.css").unwrap();
        assert_eq!(css.verb, ActionVerb::Overwrite);
        assert!(matches!(css.payload, ActionPayload::PrependDirectives(_)));
    }
}

#[test]
fn test_cra_layout_targets() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/App.js", "app");

    let plan = build_plan(dir.path(), FrameworkKind::CreateReactApp, false);
    assert_eq!(plan.find("src/App.js").unwrap().verb, ActionVerb::Delete);
    assert!(plan.find("src/index.js").is_some());
    assert!(plan.find("src/layouts/MainLayout.jsx").is_some());
    assert!(plan.find("src/lib/utils.js").is_some());
}

#[test]
fn test_alias_safe_mode_keeps_existing_paths() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        TSCONFIG,
        r#"{ "compilerOptions": { "paths": { "~/*": ["./app/*"] } } }"#,
    );

    let plan = build_plan(dir.path(), FrameworkKind::Vite, true);
    assert_eq!(plan.actions_for(StepName::AliasConfig).count(), 0);
}

#[test]
fn test_alias_merge_preserves_unrelated_keys() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        TSCONFIG,
        r#"{ "compilerOptions": { "strict": true, "paths": { "~/*": ["./app/*"] } }, "exclude": ["dist"] }"#,
    );

    let plan = build_plan(dir.path(), FrameworkKind::Vite, false);
    let action = plan.find(TSCONFIG).unwrap();
    assert_eq!(action.verb, ActionVerb::Overwrite);

    let ActionPayload::Write(content) = &action.payload else {
        panic!("expected a write payload");
    };
    let merged: Value = serde_json::from_str(content).unwrap();
    assert_eq!(merged["compilerOptions"]["strict"], true);
    assert_eq!(merged["compilerOptions"]["baseUrl"], ".");
    assert_eq!(merged["compilerOptions"]["paths"]["~/*"][0], "./app/*");
    assert_eq!(merged["compilerOptions"]["paths"]["@/*"][0], "./src/*");
    assert_eq!(merged["exclude"][0], "dist");
    assert_eq!(merged["include"][0], "src");
}

#[test]
fn test_alias_already_merged_is_up_to_date() {
    let dir = TempDir::new().unwrap();
    let merged = merge_alias(Map::new());
    write(
        dir.path(),
        JSCONFIG,
        &serde_json::to_string_pretty(&merged).unwrap(),
    );

    let plan = build_plan(dir.path(), FrameworkKind::CreateReactApp, false);
    assert_eq!(plan.actions_for(StepName::AliasConfig).count(), 0);
}

const JSONC_TSCONFIG: &str = r#"{
  // emitted by the Vite template
  "compilerOptions": {
    "strict": true,
  },
  "references": [{ "path": "./tsconfig.node.json" }],
}
"#;

#[test]
fn test_compiler_options_file_states() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(TSCONFIG);
    assert_eq!(read_compiler_options(&path), CompilerOptions::Missing);

    write(dir.path(), TSCONFIG, JSONC_TSCONFIG);
    assert_eq!(read_compiler_options(&path), CompilerOptions::Unreadable);

    write(dir.path(), TSCONFIG, r#"{ "compilerOptions": {} }"#);
    assert!(matches!(
        read_compiler_options(&path),
        CompilerOptions::Parsed(map) if map.contains_key("compilerOptions")
    ));
}

#[test]
fn test_safe_mode_leaves_jsonc_tsconfig_alone() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), TSCONFIG, JSONC_TSCONFIG);

    let plan = build_plan(dir.path(), FrameworkKind::Vite, true);

    assert!(plan.find(TSCONFIG).is_none());
    assert_eq!(plan.actions_for(StepName::AliasConfig).count(), 0);
    assert_eq!(
        plan.warnings,
        vec![PlanWarning {
            message: "alias_config_unreadable",
            target: PathBuf::from(TSCONFIG),
        }]
    );
    assert_eq!(
        fs::read_to_string(dir.path().join(TSCONFIG)).unwrap(),
        JSONC_TSCONFIG
    );
}

#[test]
fn test_unreadable_compiler_options_are_rewritten_outside_safe_mode() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), TSCONFIG, JSONC_TSCONFIG);

    let plan = build_plan(dir.path(), FrameworkKind::Vite, false);

    assert_eq!(plan.find(TSCONFIG).unwrap().verb, ActionVerb::Overwrite);
    assert!(plan.warnings.is_empty());
}

#[test]
fn test_merge_alias_replaces_non_object_options() {
    let mut data = Map::new();
    data.insert("compilerOptions".to_string(), json!("broken"));
    let merged = merge_alias(data);
    assert_eq!(merged["compilerOptions"]["paths"]["@/*"][0], "./src/*");
}

#[test]
fn test_safe_init_on_configured_project_plans_no_config_or_alias_change() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), TAILWIND_CONFIG, "module.exports = {}");
    write(
        dir.path(),
        TSCONFIG,
        r#"{ "compilerOptions": { "baseUrl": ".", "paths": { "@/*": ["./src/*"] } } }"#,
    );

    let plan = build_plan(dir.path(), FrameworkKind::Vite, true);
    assert!(plan.find(TAILWIND_CONFIG).is_none());
    assert!(plan.find(TSCONFIG).is_none());
}

#[test]
fn test_fully_configured_project_in_safe_mode_is_empty() {
    let dir = TempDir::new().unwrap();
    for file in [TAILWIND_CONFIG, POSTCSS_CONFIG, COMPONENTS_JSON, "src/lib/utils.ts"] {
        write(dir.path(), file, "x");
    }
    write(dir.path(), "src/index.css", templates::TAILWIND_DIRECTIVES);
    write(
        dir.path(),
        TSCONFIG,
        r#"{ "compilerOptions": { "paths": { "@/*": ["./src/*"] } } }"#,
    );

    let plan = build_plan(dir.path(), FrameworkKind::Vite, true);
    assert!(plan.is_empty(), "unexpected actions: {:?}", targets(&plan));
}
