/// Store module rendered with `pascal` and `camel` in the context.
pub const STORE_TS: &str = r#"import { create } from 'zustand';
import { devtools, persist } from 'zustand/middleware';
import { immer } from 'zustand/middleware/immer';

interface {{pascal}}Item {
  id: string;
  // Add fields here
}

interface {{pascal}}State {
  items: {{pascal}}Item[];
  isOpen: boolean;

  actions: {
    addItem: (item: {{pascal}}Item) => void;
    removeItem: (id: string) => void;
    updateItem: (id: string, updates: Partial<{{pascal}}Item>) => void;
    toggle: () => void;
    reset: () => void;
  };
}

const initial{{pascal}}State = {
  items: [] as {{pascal}}Item[],
  isOpen: false,
};

export const use{{pascal}}Store = create<{{pascal}}State>()(
  devtools(
    persist(
      immer((set) => ({
        ...initial{{pascal}}State,

        actions: {
          addItem: (item) =>
            set((state) => {
              state.items.push(item);
            }),

          removeItem: (id) =>
            set((state) => {
              state.items = state.items.filter((item) => item.id !== id);
            }),

          updateItem: (id, updates) =>
            set((state) => {
              const item = state.items.find((i) => i.id === id);
              if (item) {
                Object.assign(item, updates);
              }
            }),

          toggle: () =>
            set((state) => {
              state.isOpen = !state.isOpen;
            }),

          reset: () =>
            set((state) => {
              Object.assign(state, initial{{pascal}}State);
            }),
        },
      })),
      { name: '{{camel}}-storage' }
    ),
    { name: '{{pascal}}Store' }
  )
);

export const use{{pascal}}Items = () =>
  use{{pascal}}Store((state) => state.items);

export const use{{pascal}}IsOpen = () =>
  use{{pascal}}Store((state) => state.isOpen);

export const use{{pascal}}Actions = () =>
  use{{pascal}}Store((state) => state.actions);

export const use{{pascal}}ItemCount = () =>
  use{{pascal}}Store((state) => state.items.length);
"#;
