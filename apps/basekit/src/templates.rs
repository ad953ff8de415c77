//! Fixed text templates for the three generated artifacts.
//!
//! Templates carry `%TOKEN%` placeholders filled by [`substitute`] in a
//! single left-to-right pass. Substituted values are never rescanned, so a
//! description containing `%COMPONENT%` is written out literally.

use crate::models::component::GenerateOptions;

/// Values shared by all three templates.
pub struct TemplateVars<'a> {
    /// Canonical identifier, e.g. `BaseModal`.
    pub component: &'a str,
    /// Lowercased name as given on the command line, used in test ids.
    pub slug: &'a str,
    pub description: &'a str,
    pub options: &'a GenerateOptions,
}

/// Replace every `%KEY%` found in `vars`; unknown keys are left untouched.
pub fn substitute(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let hit = tail.find('%').and_then(|end| {
            let key = &tail[..end];
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, end))
        });
        match hit {
            Some((value, end)) => {
                out.push_str(value);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('%');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

const COMPONENT: &str = r#"<!-- Component description -->
<!-- %COMPONENT%: %DESCRIPTION% -->
<!-- Rationale: Custom implementation following the Base component architecture standards -->

<!-- Props: -->
%PROP_DOCS%
<!-- Events: -->
<!-- - click: fired when component is clicked -->
<!-- - focus: fired when component receives focus -->
<!-- - blur: fired when component loses focus -->

<!-- Slots: -->
%SLOT_DOCS%
<!-- Usage: -->
<!-- <%COMPONENT% variant="primary" size="normal" @click="handleClick" /> -->

<template>
  <div
    class="inline-flex items-center gap-2"
    :class="componentClasses"
    :style="customStyle"
    :aria-disabled="disabled || undefined"
    :data-testid="`%SLUG%-${variant}-${size}`"
    @click="handleClick"
    @focus="handleFocus"
    @blur="handleBlur"
  >
%CONTENT%  </div>
</template>

<script setup lang="ts">
import { computed } from 'vue'

// TypeScript interfaces
export interface %COMPONENT%Props {
  variant?: 'default' | 'primary' | 'secondary' | 'success' | 'warning' | 'danger'
  size?: 'small' | 'normal' | 'large'
  label?: string
  disabled?: boolean
  loading?: boolean
  customClass?: string
  customStyle?: Record<string, string | number>
%PROP_TYPES%}

export interface %COMPONENT%Emits {
  click: [event: MouseEvent]
  focus: [event: FocusEvent]
  blur: [event: FocusEvent]
}

export interface %COMPONENT%Slots {
  default?: () => any
%SLOT_TYPES%}

// Props with defaults
const props = withDefaults(defineProps<%COMPONENT%Props>(), {
  variant: 'default',
  size: 'normal',
  label: '',
  disabled: false,
  loading: false,
  customClass: '',
  customStyle: () => ({}),
%EXTRA_DEFAULTS%})

// Emits
const emit = defineEmits<%COMPONENT%Emits>()

// Computed classes
const variantClasses = computed(() => {
  const variants = {
    default: 'bg-white text-text border-border border',
    primary: 'bg-primary text-white border-primary',
    secondary: 'bg-secondary text-white border-secondary',
    success: 'bg-success text-white border-success',
    warning: 'bg-warning text-dark border-warning',
    danger: 'bg-danger text-white border-danger'
  }
  return variants[props.variant]
})

const sizeClasses = computed(() => {
  const sizes = {
    small: 'text-sm p-2',
    normal: 'text-base p-3',
    large: 'text-lg p-4'
  }
  return sizes[props.size]
})

const componentClasses = computed(() => [
  'font-semibold justify-center',
  'focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-accent',
  'transition-all duration-200 rounded-lg',
  variantClasses.value,
  sizeClasses.value,
  {
    'opacity-50 cursor-not-allowed': props.disabled,
    'cursor-wait': props.loading
  },
  props.customClass
])

// Event handlers
const handleClick = (event: MouseEvent) => {
  if (!props.disabled && !props.loading) {
    emit('click', event)
  }
}

const handleFocus = (event: FocusEvent) => {
  if (!props.disabled) {
    emit('focus', event)
  }
}

const handleBlur = (event: FocusEvent) => {
  emit('blur', event)
}

// Expose for testing
defineExpose({
  componentClasses,
  variantClasses,
  sizeClasses
})
</script>

<style scoped>
/* Component-specific styles using Tailwind utilities */
.focus-visible\:ring-2:focus-visible {
  --tw-ring-color: #FCD34D;
}

.animate-spin {
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to {
    transform: rotate(360deg);
  }
}
</style>
"#;

const BASE_PROP_DOCS: &str = "<!-- - variant: 'default' | 'primary' | 'secondary' | 'success' | 'warning' | 'danger' -->
<!-- - size: 'small' | 'normal' | 'large' -->
<!-- - disabled: boolean -->
<!-- - loading: boolean -->
<!-- - customClass: string (additional CSS classes) -->
<!-- - customStyle: object (inline styles) -->
";

const ICON_MARKUP: &str = r#"    <!-- Icon -->
    <i v-if="icon" :class="['pi', icon]" aria-hidden="true" />

"#;

const SPINNER_MARKUP: &str = r#"    <!-- Loading spinner -->
    <i
      v-if="loading"
      class="pi pi-spinner animate-spin"
      aria-hidden="true"
    />

"#;

/// Render the single-file component definition.
pub fn render_component(vars: &TemplateVars) -> String {
    let opts = vars.options;

    let mut prop_docs = String::from(BASE_PROP_DOCS);
    let mut prop_types = String::new();
    let mut extra_defaults = String::new();
    if opts.has_icon {
        prop_docs.push_str("<!-- - icon: string (icon class rendered before the content) -->\n");
        prop_types.push_str("  icon?: string\n");
        extra_defaults.push_str("  icon: '',\n");
    }
    for prop in &opts.custom_props {
        prop_docs.push_str(&format!(
            "<!-- - {}: {} ({}) -->\n",
            prop.name, prop.ty, prop.description
        ));
        prop_types.push_str(&format!("  {}?: {}\n", prop.name, prop.ty));
    }

    let mut slot_docs = String::from("<!-- - default: main content -->\n");
    let mut slot_types = String::new();
    let mut content = String::new();
    if opts.has_slots {
        slot_docs.push_str("<!-- - prefix: content before main element -->\n");
        slot_docs.push_str("<!-- - suffix: content after main element -->\n");
        slot_types.push_str("  prefix?: () => any\n  suffix?: () => any\n");
        content.push_str("    <!-- Prefix slot -->\n    <slot name=\"prefix\" />\n\n");
    }
    if opts.has_icon {
        content.push_str(ICON_MARKUP);
    }
    content.push_str(SPINNER_MARKUP);
    if opts.has_slots {
        content.push_str(
            "    <!-- Main content -->\n    <div :class=\"{ 'opacity-50': loading }\">\n      <slot>{{ label }}</slot>\n    </div>\n\n",
        );
        content.push_str("    <!-- Suffix slot -->\n    <slot name=\"suffix\" />\n");
    } else {
        content.push_str("    <!-- Main content -->\n    <slot>{{ label }}</slot>\n");
    }

    substitute(
        COMPONENT,
        &[
            ("COMPONENT", vars.component),
            ("DESCRIPTION", vars.description),
            ("SLUG", vars.slug),
            ("PROP_DOCS", &prop_docs),
            ("SLOT_DOCS", &slot_docs),
            ("CONTENT", &content),
            ("PROP_TYPES", &prop_types),
            ("SLOT_TYPES", &slot_types),
            ("EXTRA_DEFAULTS", &extra_defaults),
        ],
    )
}

const TEST_SUITE: &str = r#"import { describe, it, expect } from 'vitest'
import { mount } from '@vue/test-utils'
import %COMPONENT% from '%IMPORT%'

describe('%COMPONENT%', () => {
  describe('Rendering', () => {
    it('should render with default props', () => {
      const wrapper = mount(%COMPONENT%)
      expect(wrapper.exists()).toBe(true)
      expect(wrapper.attributes('data-testid')).toBe('%SLUG%-default-normal')
    })

    it('should render with custom label', () => {
      const wrapper = mount(%COMPONENT%, {
        props: { label: 'Test Label' }
      })
      expect(wrapper.text()).toContain('Test Label')
    })

    it('should render slot content', () => {
      const wrapper = mount(%COMPONENT%, {
        slots: { default: 'Slot Content' }
      })
      expect(wrapper.text()).toContain('Slot Content')
    })
%SLOT_TESTS%  })

  describe('Props', () => {
    it('should apply variant classes', () => {
      const wrapper = mount(%COMPONENT%, {
        props: { variant: 'primary' }
      })
      expect(wrapper.classes()).toContain('bg-primary')
    })

    it('should apply size classes', () => {
      const wrapper = mount(%COMPONENT%, {
        props: { size: 'large' }
      })
      expect(wrapper.classes()).toContain('text-lg')
    })

    it('should handle disabled state', () => {
      const wrapper = mount(%COMPONENT%, {
        props: { disabled: true }
      })
      expect(wrapper.classes()).toContain('opacity-50')
      expect(wrapper.classes()).toContain('cursor-not-allowed')
    })

    it('should handle loading state', () => {
      const wrapper = mount(%COMPONENT%, {
        props: { loading: true }
      })
      expect(wrapper.classes()).toContain('cursor-wait')
      expect(wrapper.find('.pi-spinner').exists()).toBe(true)
    })

    it('should apply custom classes', () => {
      const wrapper = mount(%COMPONENT%, {
        props: { customClass: 'custom-class' }
      })
      expect(wrapper.classes()).toContain('custom-class')
    })
%ICON_TESTS%  })

  describe('Events', () => {
    it('should emit click event when clicked', async () => {
      const wrapper = mount(%COMPONENT%)
      await wrapper.trigger('click')
      expect(wrapper.emitted('click')).toBeTruthy()
    })

    it('should not emit click when disabled', async () => {
      const wrapper = mount(%COMPONENT%, {
        props: { disabled: true }
      })
      await wrapper.trigger('click')
      expect(wrapper.emitted('click')).toBeFalsy()
    })

    it('should emit focus and blur events', async () => {
      const wrapper = mount(%COMPONENT%)
      await wrapper.trigger('focus')
      await wrapper.trigger('blur')
      expect(wrapper.emitted('focus')).toBeTruthy()
      expect(wrapper.emitted('blur')).toBeTruthy()
    })
  })

  describe('Accessibility', () => {
    it('should have proper data-testid', () => {
      const wrapper = mount(%COMPONENT%, {
        props: { variant: 'primary', size: 'large' }
      })
      expect(wrapper.attributes('data-testid')).toBe('%SLUG%-primary-large')
    })

    it('should mark disabled state for assistive technology', () => {
      const wrapper = mount(%COMPONENT%, {
        props: { disabled: true }
      })
      expect(wrapper.attributes('aria-disabled')).toBe('true')
    })
  })
})
"#;

const SLOT_TESTS: &str = r#"
    it('should render prefix and suffix slots', () => {
      const wrapper = mount(%COMPONENT%, {
        slots: { prefix: 'Before', suffix: 'After' }
      })
      expect(wrapper.text()).toContain('Before')
      expect(wrapper.text()).toContain('After')
    })
"#;

const ICON_TESTS: &str = r#"
    it('should render the icon', () => {
      const wrapper = mount(%COMPONENT%, {
        props: { icon: 'pi-check' }
      })
      expect(wrapper.find('.pi-check').exists()).toBe(true)
    })
"#;

/// Render the test suite; `import` is the module specifier of the component.
pub fn render_test(vars: &TemplateVars, import: &str) -> String {
    let opts = vars.options;
    let slot_tests = if opts.has_slots {
        substitute(SLOT_TESTS, &[("COMPONENT", vars.component)])
    } else {
        String::new()
    };
    let icon_tests = if opts.has_icon {
        substitute(ICON_TESTS, &[("COMPONENT", vars.component)])
    } else {
        String::new()
    };
    substitute(
        TEST_SUITE,
        &[
            ("COMPONENT", vars.component),
            ("IMPORT", import),
            ("SLUG", vars.slug),
            ("SLOT_TESTS", &slot_tests),
            ("ICON_TESTS", &icon_tests),
        ],
    )
}

const STORY: &str = r#"import type { Meta, StoryObj } from '@storybook/vue3'
import %COMPONENT% from '%IMPORT%'

const meta: Meta<typeof %COMPONENT%> = {
  title: 'Components/%COMPONENT%',
  component: %COMPONENT%,
  parameters: {
    docs: {
      description: {
        component: `
# %COMPONENT%

%DESCRIPTION%

## Features
- Multiple variants (default, primary, secondary, success, warning, danger)
- Three sizes (small, normal, large)
- Loading states
- Full accessibility compliance
- Keyboard navigation support
        `,
      },
    },
  },
  argTypes: {
    variant: {
      control: 'select',
      options: ['default', 'primary', 'secondary', 'success', 'warning', 'danger'],
      description: 'The stylistic variant',
    },
    size: {
      control: 'select',
      options: ['small', 'normal', 'large'],
      description: 'The size',
    },
    label: {
      control: 'text',
      description: 'The text to display',
    },
    disabled: {
      control: 'boolean',
      description: 'Disables the component',
    },
    loading: {
      control: 'boolean',
      description: 'Shows loading state',
    },
%ICON_ARG%  },
  tags: ['autodocs'],
}

export default meta
type Story = StoryObj<typeof meta>

export const Default: Story = {
  args: {
    label: '%COMPONENT%',
    variant: 'default',
    size: 'normal',
  },
}

export const AllVariants: Story = {
  render: () => ({
    components: { %COMPONENT% },
    template: `
      <div class="flex flex-wrap gap-4 p-4">
        <%COMPONENT% label="Default" variant="default" />
        <%COMPONENT% label="Primary" variant="primary" />
        <%COMPONENT% label="Secondary" variant="secondary" />
        <%COMPONENT% label="Success" variant="success" />
        <%COMPONENT% label="Warning" variant="warning" />
        <%COMPONENT% label="Danger" variant="danger" />
      </div>
    `,
  }),
}

export const AllSizes: Story = {
  render: () => ({
    components: { %COMPONENT% },
    template: `
      <div class="flex items-center gap-4 p-4">
        <%COMPONENT% label="Small" variant="primary" size="small" />
        <%COMPONENT% label="Normal" variant="primary" size="normal" />
        <%COMPONENT% label="Large" variant="primary" size="large" />
      </div>
    `,
  }),
}

export const LoadingStates: Story = {
  render: () => ({
    components: { %COMPONENT% },
    template: `
      <div class="flex gap-4 p-4">
        <%COMPONENT% label="Normal" variant="primary" />
        <%COMPONENT% label="Loading" variant="primary" :loading="true" />
        <%COMPONENT% label="Disabled" variant="primary" :disabled="true" />
      </div>
    `,
  }),
}
"#;

const ICON_ARG: &str = "    icon: {
      control: 'text',
      description: 'Icon class rendered before the content',
    },
";

/// Render the usage story; `import` is the module specifier of the component.
pub fn render_story(vars: &TemplateVars, import: &str) -> String {
    let icon_arg = if vars.options.has_icon { ICON_ARG } else { "" };
    substitute(
        STORY,
        &[
            ("COMPONENT", vars.component),
            ("IMPORT", import),
            ("DESCRIPTION", vars.description),
            ("ICON_ARG", icon_arg),
        ],
    )
}
