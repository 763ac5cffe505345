//! View rendering for the certificate wizard.
//!
//! All five step panels stay mounted and only the active one is visible, so
//! the file inputs keep their selection while the user moves back and forth.
//! Error banners are rendered at the top of the panel they were raised in.

use common::model::file::FileRole;
use common::model::mapping::FieldMapping;
use common::preview_page::link_for;
use common::wizard::{Banner, Step, WizardEvent};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::WizardComponent;

/// Main view function: title, stepper, and the step panels.
pub fn view(component: &WizardComponent, ctx: &Context<WizardComponent>) -> Html {
    let link = ctx.link();
    let current = component.wizard.current_step();

    html! {
        <div class="container wizard">
            <h1 class="wizard-title">{"Certificate Generator"}</h1>
            { build_stepper(current) }
            { for Step::ALL.into_iter().map(|step| build_panel(component, link, step, current)) }
        </div>
    }
}

fn build_stepper(current: Step) -> Html {
    html! {
        <ol class="stepper">
            { for Step::ALL.into_iter().map(|step| {
                let class = classes!(
                    "stepper-item",
                    (step == current).then_some("active"),
                    (step < current).then_some("completed"),
                );
                html! {
                    <li class={class}>
                        <span class="stepper-number">{ step.number() }</span>
                        <span class="stepper-title">{ step.title() }</span>
                    </li>
                }
            }) }
        </ol>
    }
}

fn build_panel(
    component: &WizardComponent,
    link: &Scope<WizardComponent>,
    step: Step,
    current: Step,
) -> Html {
    let body = match step {
        Step::Intake => build_intake(component, link),
        Step::Mapping => build_mapping(component, link),
        Step::Preview => build_preview(component, link),
        Step::Generation => build_generation(component, link),
        Step::Completion => build_completion(component, link),
    };

    html! {
        <section class={classes!("step-panel", (step != current).then_some("d-none"))}>
            { for component.wizard.ui.banners_for(step).map(|banner| build_banner(banner, link)) }
            { body }
        </section>
    }
}

fn build_banner(banner: &Banner, link: &Scope<WizardComponent>) -> Html {
    let id = banner.id;
    html! {
        <div
            key={id.0.to_string()}
            class={classes!("alert", "alert-danger", "alert-dismissible", "fade", (!banner.fading).then_some("show"))}
            role="alert"
        >
            { banner.message.clone() }
            <button
                type="button"
                class="btn-close"
                aria-label="Close"
                onclick={link.callback(move |_| WizardEvent::DismissBanner(id))}
            />
        </div>
    }
}

fn build_intake(component: &WizardComponent, link: &Scope<WizardComponent>) -> Html {
    html! {
        <div class="step-content">
            <div class="row">
                { upload_box(component, link, FileRole::Spreadsheet) }
                { upload_box(component, link, FileRole::Template) }
            </div>
            <div class="step-actions">
                <button
                    type="button"
                    class="btn btn-primary"
                    disabled={!component.wizard.ui.next_enabled}
                    onclick={link.callback(|_| WizardEvent::Next)}
                >
                    {"Next"}
                </button>
            </div>
        </div>
    }
}

fn upload_box(component: &WizardComponent, link: &Scope<WizardComponent>, role: FileRole) -> Html {
    let slot = component.wizard.ui.slot(role);
    let input_id = match role {
        FileRole::Spreadsheet => "excel-file",
        FileRole::Template => "template-file",
    };
    let onchange = link.batch_callback(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input
            .files()
            .and_then(|files| files.get(0))
            .map(|file| Msg::FilePicked { role, file })
    });

    html! {
        <div class="col-md-6">
            <div class={classes!("upload-box", slot.filled.then_some("filled"))}>
                <label class="form-label" for={input_id}>{ role.label() }</label>
                <input
                    id={input_id}
                    type="file"
                    class="form-control"
                    accept={role.accept()}
                    ref={component.file_input(role).clone()}
                    {onchange}
                />
                <div class="file-name">
                    { slot.label.clone().unwrap_or_else(|| "No file chosen".to_string()) }
                </div>
            </div>
        </div>
    }
}

fn build_mapping(component: &WizardComponent, link: &Scope<WizardComponent>) -> Html {
    let headers = &component.wizard.state.excel_headers;
    html! {
        <div class="step-content">
            <p class="text-muted">{"Match each template field with a column from your spreadsheet."}</p>
            <table class="table mapping-table">
                <thead>
                    <tr>
                        <th>{"Template field"}</th>
                        <th>{"Excel column"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for component.wizard.state.mappings.iter().map(|m| mapping_row(m, headers, link)) }
                </tbody>
            </table>
            { nav_buttons(link) }
        </div>
    }
}

fn mapping_row(mapping: &FieldMapping, headers: &[String], link: &Scope<WizardComponent>) -> Html {
    let field = mapping.field.clone();
    let onchange = link.callback(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        WizardEvent::MappingChanged {
            field: field.clone(),
            column: select.value(),
        }
    });

    html! {
        <tr key={mapping.field.clone()}>
            <td class="field-name">{ mapping.label() }</td>
            <td>
                <select class="form-select" {onchange}>
                    <option value="" selected={!mapping.is_mapped()}>{"-- Select Excel Column --"}</option>
                    { for headers.iter().map(|header| html! {
                        <option value={header.clone()} selected={*header == mapping.column}>
                            { header.clone() }
                        </option>
                    }) }
                </select>
            </td>
        </tr>
    }
}

fn build_preview(component: &WizardComponent, link: &Scope<WizardComponent>) -> Html {
    let state = &component.wizard.state;
    let ui = &component.wizard.ui;
    let onchange = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        WizardEvent::PreviewRowChanged(select.value().parse().unwrap_or(0))
    });

    let download = match (&ui.preview_download, &state.preview_file) {
        (Some(url), Some(file)) => html! {
            <div class="preview-actions">
                <a class="btn btn-outline-primary" href={url.clone()} download="">{"Download preview"}</a>
                <a class="btn btn-link" href={link_for(file)} target="_blank">{"Open preview page"}</a>
            </div>
        },
        _ => html! {},
    };

    html! {
        <div class="step-content">
            <div class="mb-3">
                <label class="form-label" for="preview-row">{"Row to preview"}</label>
                <select id="preview-row" class="form-select" {onchange}>
                    { for (0..state.row_count).map(|row| html! {
                        <option value={row.to_string()} selected={row == state.preview_row}>
                            { format!("Row {}", row + 1) }
                        </option>
                    }) }
                </select>
            </div>
            <button
                type="button"
                class="btn btn-outline-primary mb-3"
                disabled={ui.preview_loading}
                onclick={link.callback(|_| WizardEvent::GeneratePreview)}
            >
                {"Generate Preview"}
            </button>
            if ui.preview_loading {
                { spinner(ui.preview_status()) }
            } else {
                <p class="text-muted">{ ui.preview_status() }</p>
            }
            { download }
            { nav_buttons(link) }
        </div>
    }
}

fn build_generation(component: &WizardComponent, link: &Scope<WizardComponent>) -> Html {
    let state = &component.wizard.state;
    let ui = &component.wizard.ui;

    html! {
        <div class="step-content">
            <p>
                { format!(
                    "Certificates will be generated from {} using {}.",
                    state.excel_file_name, state.template_file_name
                ) }
            </p>
            <button
                type="button"
                class="btn btn-success"
                disabled={!ui.generate_enabled}
                onclick={link.callback(|_| WizardEvent::Generate)}
            >
                {"Generate Certificates"}
            </button>
            if ui.generating {
                { spinner("Generating certificates...") }
            }
            if ui.generation_failed && !ui.generating {
                <div class="generation-recovery">
                    <button type="button" class="btn btn-warning" onclick={link.callback(|_| WizardEvent::Retry)}>
                        {"Retry"}
                    </button>
                    <button type="button" class="btn btn-outline-secondary" onclick={link.callback(|_| WizardEvent::StartOver)}>
                        {"Start Over"}
                    </button>
                </div>
            }
            <div class="step-actions">
                <button
                    type="button"
                    class="btn btn-secondary"
                    disabled={ui.generating}
                    onclick={link.callback(|_| WizardEvent::Back)}
                >
                    {"Back"}
                </button>
                <button
                    type="button"
                    class="btn btn-primary"
                    disabled={ui.generating}
                    onclick={link.callback(|_| WizardEvent::Next)}
                >
                    {"Next"}
                </button>
            </div>
        </div>
    }
}

fn build_completion(component: &WizardComponent, link: &Scope<WizardComponent>) -> Html {
    let completion = match &component.wizard.ui.completion_download {
        Some(url) => html! {
            <div class="alert alert-success completion">
                <p>{"Certificates generated successfully!"}</p>
                <a class="btn btn-primary" href={url.clone()} download="">{"Download Certificates"}</a>
            </div>
        },
        None => html! { <p class="text-muted">{"No certificates have been generated yet."}</p> },
    };

    html! {
        <div class="step-content">
            { completion }
            <div class="step-actions">
                <button type="button" class="btn btn-outline-secondary" onclick={link.callback(|_| WizardEvent::StartOver)}>
                    {"Start Over"}
                </button>
            </div>
        </div>
    }
}

fn nav_buttons(link: &Scope<WizardComponent>) -> Html {
    html! {
        <div class="step-actions">
            <button type="button" class="btn btn-secondary" onclick={link.callback(|_| WizardEvent::Back)}>
                {"Back"}
            </button>
            <button type="button" class="btn btn-primary" onclick={link.callback(|_| WizardEvent::Next)}>
                {"Next"}
            </button>
        </div>
    }
}

fn spinner(label: &'static str) -> Html {
    html! {
        <div class="d-flex align-items-center gap-2 my-3">
            <div class="spinner-border text-primary" role="status" />
            <span>{ label }</span>
        </div>
    }
}
