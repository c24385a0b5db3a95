//! Generated file contents.
//!
//! Everything here is fixed text keyed by framework; nothing reads the disk.

use crate::core::types::FrameworkKind;
use serde_json::json;

/// Block prepended to the global stylesheet
pub const TAILWIND_DIRECTIVES: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n";

pub fn has_tailwind_directives(css: &str) -> bool {
    contains_block(css, TAILWIND_DIRECTIVES)
}

/// True when every non-empty line of `block` appears as a line of `content`
pub fn contains_block(content: &str, block: &str) -> bool {
    block
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .all(|wanted| content.lines().any(|line| line.trim() == wanted))
}

pub fn tailwind_config(framework: FrameworkKind) -> String {
    let content_paths = match framework {
        FrameworkKind::Vite => r#""./index.html", "./src/**/*.{js,ts,jsx,tsx}""#,
        FrameworkKind::NextJS => {
            r#""./pages/**/*.{js,ts,jsx,tsx}", "./components/**/*.{js,ts,jsx,tsx}", "./app/**/*.{js,ts,jsx,tsx}", "./src/**/*.{js,ts,jsx,tsx}""#
        }
        FrameworkKind::CreateReactApp | FrameworkKind::Unknown => {
            r#""./src/**/*.{js,jsx,ts,tsx}""#
        }
    };

    format!(
        r#"/** @type {{import('tailwindcss').Config}} */
module.exports = {{
  darkMode: ["class"],
  content: [{content_paths}],
  prefix: "",
  theme: {{
    container: {{
      center: true,
      padding: "2rem",
      screens: {{ "2xl": "1400px" }},
    }},
    extend: {{
      keyframes: {{
        "accordion-down": {{ from: {{ height: "0" }}, to: {{ height: "var(--radix-accordion-content-height)" }} }},
        "accordion-up": {{ from: {{ height: "var(--radix-accordion-content-height)" }}, to: {{ height: "0" }} }},
      }},
      animation: {{
        "accordion-down": "accordion-down 0.2s ease-out",
        "accordion-up": "accordion-up 0.2s ease-out",
      }},
    }},
  }},
  plugins: [require("tailwindcss-animate")],
}}
"#
    )
}

pub fn postcss_config() -> String {
    "module.exports = { plugins: { tailwindcss: {}, autoprefixer: {} } }\n".to_string()
}

pub fn components_json(framework: FrameworkKind) -> String {
    let layout = framework.layout();
    let config = json!({
        "$schema": "https://ui.shadcn.com/schema.json",
        "style": "default",
        "rsc": framework == FrameworkKind::NextJS,
        "tsx": framework.uses_typescript(),
        "tailwind": {
            "config": "tailwind.config.js",
            "css": layout.global_css,
            "baseColor": "slate",
            "cssVariables": true
        },
        "aliases": {
            "components": "@/components",
            "utils": "@/lib/utils"
        }
    });

    // json! output of a literal object never fails to serialize
    let mut text = serde_json::to_string_pretty(&config).unwrap_or_default();
    text.push('\n');
    text
}

pub fn utils_module(framework: FrameworkKind) -> String {
    if framework.uses_typescript() {
        r#"import { type ClassValue, clsx } from "clsx";
import { twMerge } from "tailwind-merge";

export function cn(...inputs: ClassValue[]) {
  return twMerge(clsx(inputs));
}
"#
        .to_string()
    } else {
        r#"import { clsx } from "clsx";
import { twMerge } from "tailwind-merge";

export function cn(...inputs) {
  return twMerge(clsx(inputs));
}
"#
        .to_string()
    }
}

/// Entry file that mounts the router directly
pub fn entry_file(framework: FrameworkKind) -> String {
    let layout = framework.layout();
    let root_lookup = if framework.uses_typescript() {
        "document.getElementById('root')!"
    } else {
        "document.getElementById('root')"
    };
    // the entry file lives in src/
    let stylesheet = match layout.global_css.strip_prefix("src/") {
        Some(name) => format!("./{}", name),
        None => format!("../{}", layout.global_css),
    };

    format!(
        r#"import React from 'react'
import ReactDOM from 'react-dom/client'
import {{ BrowserRouter, Routes, Route }} from 'react-router-dom'
import MainLayout from '@/layouts/MainLayout'
import HomePage from '@/pages/HomePage'
import '{stylesheet}'

ReactDOM.createRoot({root_lookup}).render(
  <React.StrictMode>
    <BrowserRouter>
      <Routes>
        <Route path="/" element={{<MainLayout />}}>
          <Route index element={{<HomePage />}} />
        </Route>
      </Routes>
    </BrowserRouter>
  </React.StrictMode>,
)
"#
    )
}

pub fn main_layout() -> String {
    r#"import { Outlet } from "react-router-dom";

const MainLayout = () => {
  return (
    <div className="min-h-screen bg-background text-foreground">
      <header className="container mx-auto py-4">
        {/* Header content goes here */}
      </header>
      <main className="container mx-auto flex-grow">
        <Outlet />
      </main>
      <footer className="container mx-auto py-4 mt-8 border-t">
        {/* Footer content goes here */}
      </footer>
    </div>
  );
};

export default MainLayout;
"#
    .to_string()
}

pub fn home_page() -> String {
    r#"const HomePage = () => {
  return (
    <div className="flex flex-col items-center justify-center gap-8">
      <div className="text-center">
        <h1 className="text-4xl font-bold tracking-tight lg:text-5xl">
          Welcome to Shacnify
        </h1>
        <p className="mt-4 text-lg text-muted-foreground">
          Tailwind CSS and shadcn/ui are ready. Edit src/pages/HomePage to get started.
        </p>
      </div>
    </div>
  );
};

export default HomePage;
"#
    .to_string()
}
